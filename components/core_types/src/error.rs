//! Translation error types.
//!
//! Lexical errors are fatal for a translation job, syntax errors are turned
//! into error nodes by the analyser, context errors come from a malformed
//! pre-seeded scope.

use crate::SourcePosition;
use std::fmt;

/// The category of a translation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token: bad number, bad operator run, unterminated literal
    LexicalError,
    /// Grammar violation inside a single statement
    SyntaxError,
    /// The context used to seed the global scope is not an object
    ContextError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::LexicalError => "LexicalError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::ContextError => "ContextError",
        };
        f.write_str(name)
    }
}

/// An error raised while translating dialect source.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, SourcePosition, TranslateError};
///
/// let error = TranslateError::new(ErrorKind::SyntaxError, "Expected ':'", None);
/// assert!(error.is_syntax());
/// assert_eq!(error.to_string(), "SyntaxError: Expected ':'");
///
/// let error = error.at(SourcePosition::line(4));
/// assert_eq!(error.line(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}{}: {message}", line_suffix(.position))]
pub struct TranslateError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source position where the error occurred
    pub position: Option<SourcePosition>,
}

fn line_suffix(position: &Option<SourcePosition>) -> String {
    match position {
        Some(pos) => format!(" (line {})", pos.line),
        None => String::new(),
    }
}

impl TranslateError {
    /// Create an error of the given kind
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        position: Option<SourcePosition>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }

    /// Replace the position of this error
    pub fn at(mut self, position: SourcePosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Line the error was raised on, if known
    pub fn line(&self) -> Option<u32> {
        self.position.map(|p| p.line)
    }

    /// Whether the analyser can recover from this error
    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::SyntaxError
    }
}
