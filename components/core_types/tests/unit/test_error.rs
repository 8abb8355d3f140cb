//! Unit tests for TranslateError and ErrorKind

use core_types::{ErrorKind, SourcePosition, TranslateError};

#[test]
fn test_error_kind_variants() {
    let _lexical = ErrorKind::LexicalError;
    let _syntax = ErrorKind::SyntaxError;
    let _context = ErrorKind::ContextError;
}

#[test]
fn test_error_without_position_display() {
    let error = TranslateError::new(ErrorKind::ContextError, "context must be an object", None);
    assert_eq!(error.to_string(), "ContextError: context must be an object");
}

#[test]
fn test_error_at_sets_position() {
    let error = TranslateError::new(ErrorKind::SyntaxError, "Expected ')'", None)
        .at(SourcePosition::line(8));
    assert_eq!(error.line(), Some(8));
    assert_eq!(error.to_string(), "SyntaxError (line 8): Expected ')'");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    let error = TranslateError::new(ErrorKind::LexicalError, "bad", None);
    takes_error(&error);
}

#[test]
fn test_only_syntax_errors_are_recoverable() {
    let lexical = TranslateError::new(ErrorKind::LexicalError, "bad", None);
    let syntax = TranslateError::new(ErrorKind::SyntaxError, "bad", None);
    assert!(!lexical.is_syntax());
    assert!(syntax.is_syntax());
}
