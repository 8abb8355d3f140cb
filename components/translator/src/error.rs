//! Translator error helpers

use core_types::{ErrorKind, SourcePosition, TranslateError};

/// Create a syntax error raised on `line`
pub fn syntax_error(message: impl Into<String>, line: u32) -> TranslateError {
    TranslateError::new(
        ErrorKind::SyntaxError,
        message,
        Some(SourcePosition::line(line)),
    )
}

/// Create an unexpected token error
pub fn unexpected_token(expected: &str, got: &str, line: u32) -> TranslateError {
    syntax_error(format!("Expected {}, got {}", expected, got), line)
}

/// Create a lexical error raised on `line`
pub fn lexical_error(message: impl Into<String>, line: u32) -> TranslateError {
    TranslateError::new(
        ErrorKind::LexicalError,
        message,
        Some(SourcePosition::line(line)),
    )
}
