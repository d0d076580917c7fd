//! Core error types shared across the front-end.
//!
//! Lexical and syntactic problems inside a source file go through the
//! diagnostic [`Handler`](crate::Handler); the types here cover failures of
//! the compilation itself, before any source byte is read.

use thiserror::Error;

/// A failure that prevents a compilation from starting.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The command line named no input file.
    #[error("no input file provided")]
    MissingInput,

    /// An option the driver does not understand.
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message() {
        assert_eq!(
            CompileError::MissingInput.to_string(),
            "no input file provided"
        );
    }

    #[test]
    fn test_unknown_option_message() {
        assert_eq!(
            CompileError::UnknownOption("--wat".to_string()).to_string(),
            "unknown option '--wat'"
        );
    }
}
