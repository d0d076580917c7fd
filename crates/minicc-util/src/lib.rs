//! minicc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation shared by every phase of the minicc
//! front-end:
//!
//! - [`Span`] - source locations (1-based line/column)
//! - [`Diagnostic`], [`Level`], [`Handler`] - error and warning reporting
//! - [`CompileError`] - typed driver-level failures
//!
//! The diagnostic handler is deliberately an explicit value passed to the
//! lexer and parser rather than process-global state: each compilation owns
//! its reporter, so error counts never leak between files.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::CompileError;
pub use span::Span;
