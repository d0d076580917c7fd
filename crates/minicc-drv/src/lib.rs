//! minicc-drv - Compiler Driver
//!
//! Orchestrates one front-end run: open the input file, stream it through
//! the lexer and parser, print the requested artifact (token stream or
//! AST dump) on stdout, and render every collected diagnostic on stderr.
//!
//! Exit-status contract: the process fails only when the compilation
//! cannot start (bad usage, unreadable file). Lexical and syntax errors
//! inside the file are reported and leave a partial tree, but the exit
//! status stays 0; batch consumers inspect the diagnostics instead.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use minicc_lex::Lexer;
use minicc_par::Parser;
use minicc_util::{CompileError, Handler, Level};

/// What the driver prints on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitType {
    /// The token stream, one token per line.
    Tokens,
    /// The AST dump (default).
    Ast,
}

/// Configuration for one driver run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path of the source file.
    pub input: PathBuf,

    /// Artifact to print.
    pub emit: EmitType,
}

/// Parses the argument vector (without the program name).
pub fn parse_args<I>(args: I) -> Result<Config, CompileError>
where
    I: IntoIterator<Item = String>,
{
    let mut emit = EmitType::Ast;
    let mut input = None;

    for arg in args {
        match arg.as_str() {
            "--emit-tokens" => emit = EmitType::Tokens,
            "--emit-ast" => emit = EmitType::Ast,
            other if other.starts_with('-') => {
                return Err(CompileError::UnknownOption(other.to_string()));
            },
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let input = input.ok_or(CompileError::MissingInput)?;
    Ok(Config { input, emit })
}

/// Runs the front-end over the configured input.
pub fn run(config: &Config) -> Result<()> {
    let file = File::open(&config.input)
        .with_context(|| format!("failed to open {}", config.input.display()))?;

    let handler = Handler::with_file(config.input.display().to_string());
    let lexer = Lexer::new(file, &handler);

    match config.emit {
        EmitType::Tokens => {
            for token in lexer {
                println!(
                    "{}:{}: {} '{}'",
                    token.line, token.column, token.kind, token.lexeme
                );
            }
        },
        EmitType::Ast => {
            let mut parser = Parser::new(lexer, &handler);
            let program = parser.parse_program();
            print!("{}", program);
        },
    }

    for diagnostic in handler.diagnostics() {
        let rendered = diagnostic.to_string();
        match diagnostic.level {
            Level::Error => eprintln!("{}", rendered.red()),
            Level::Warning => eprintln!("{}", rendered.yellow()),
        }
    }

    Ok(())
}
