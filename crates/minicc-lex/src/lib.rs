//! minicc-lex - Lexical Analyzer
//!
//! Transforms a stream of source bytes into a stream of [`Token`]s. The
//! input is consumed through a fixed-capacity refillable buffer, so whole
//! files are never loaded into memory; the scanner works on one byte of
//! lookahead and the parser on one token of lookahead.
//!
//! The lexer never aborts: every lexical failure (unterminated comment or
//! literal, invalid escape, unexpected byte) is reported to the shared
//! diagnostic handler, synthesized as an [`TokenKind::Error`] token whose
//! lexeme describes the problem, and scanning continues.
//!
//! # Example
//!
//! ```
//! use minicc_lex::{Lexer, TokenKind};
//! use minicc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(&b"int x = 42;"[..], &handler);
//!
//! assert_eq!(lexer.peek().kind, TokenKind::Int);
//! lexer.advance();
//! assert_eq!(lexer.peek().lexeme, "x");
//! ```

pub mod cursor;
mod edge_cases;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
