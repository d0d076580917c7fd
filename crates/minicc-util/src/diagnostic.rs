//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The [`Handler`] collects diagnostics emitted by the lexer and the parser
//! during one compilation. Both phases hold a shared `&Handler`; interior
//! mutability keeps the reporting API `&self` so a lexer owned by a parser
//! can still report. The rendered text of a [`Diagnostic`] follows the
//! classic batch-compiler shape:
//!
//! ```text
//! Error in main.c:3:7: Expected token SEMICOLON, got RBRACE
//! ```
//!
//! with the filename, location, and quoted-token parts each optional.

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that makes the compilation unit invalid.
    Error,
    /// A condition worth flagging that does not invalidate the unit.
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "Error"),
            Level::Warning => write!(f, "Warning"),
        }
    }
}

/// A single diagnostic record.
///
/// # Examples
///
/// ```
/// use minicc_util::{Diagnostic, Span};
///
/// let diag = Diagnostic::error("Expected expression", Some(Span::new(2, 5)));
/// assert_eq!(diag.to_string(), "Error at line 2, column 5: Expected expression");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub level: Level,
    /// Main message text.
    pub message: String,
    /// Source location, if known.
    pub span: Option<Span>,
    /// Offending token text, quoted after the message when present.
    pub token: Option<String>,
    /// Source filename, stamped in by the handler when it knows one.
    pub file: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
            token: None,
            file: None,
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span,
            token: None,
            file: None,
        }
    }

    /// Attaches the offending token text.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.span) {
            (Some(file), Some(span)) => {
                write!(f, "{} in {}:{}:{}: {}", self.level, file, span.line, span.column, self.message)?;
            },
            (Some(file), None) => {
                write!(f, "{} in {}: {}", self.level, file, self.message)?;
            },
            (None, Some(span)) => {
                write!(f, "{} at line {}, column {}: {}", self.level, span.line, span.column, self.message)?;
            },
            (None, None) => {
                write!(f, "{}: {}", self.level, self.message)?;
            },
        }
        if let Some(token) = &self.token {
            write!(f, ": '{}'", token)?;
        }
        Ok(())
    }
}

/// Collector for the diagnostics of one compilation.
///
/// # Examples
///
/// ```
/// use minicc_util::{Handler, Span};
///
/// let handler = Handler::new();
/// handler.report_at(Span::new(1, 5), "Unexpected character: '@'");
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    /// Filename stamped into every diagnostic, when known.
    file: Option<String>,
    /// Collected diagnostics, in emission order.
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates a handler with no associated filename.
    pub fn new() -> Self {
        Self {
            file: None,
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Creates a handler that stamps `file` into every diagnostic.
    pub fn with_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Reports an error with no location.
    pub fn report(&self, message: impl Into<String>) {
        self.emit(Diagnostic::error(message, None));
    }

    /// Reports an error at a source location.
    pub fn report_at(&self, span: Span, message: impl Into<String>) {
        self.emit(Diagnostic::error(message, Some(span)));
    }

    /// Reports an error at a source location, quoting the offending token.
    pub fn report_with_token(&self, span: Span, token: &str, message: impl Into<String>) {
        self.emit(Diagnostic::error(message, Some(span)).with_token(token));
    }

    /// Reports a warning at a source location.
    pub fn warn_at(&self, span: Span, message: impl Into<String>) {
        self.emit(Diagnostic::warning(message, Some(span)));
    }

    fn emit(&self, mut diagnostic: Diagnostic) {
        diagnostic.file = self.file.clone();
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any errors have been reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Number of warnings reported so far.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Returns a copy of all diagnostics in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clears all collected diagnostics, resetting the counts to zero.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
