//! Contract tests for the translator API
//!
//! These tests verify the public surface of each translator part.

use core_types::{ErrorKind, Kind, TranslateError};
use serde_json::json;
use translator::dictionary::{self, MemberRename};
use translator::{
    convert, convert_with_context, Analyser, Converter, Node, Scope, StringStyle, Token,
    TokenKind, Tokenizer,
};

// =============================================================================
// Tokenizer Contract Tests
// =============================================================================

#[test]
fn test_tokenizer_new_returns_result() {
    let result: Result<Tokenizer, TranslateError> = Tokenizer::new("def x = 1");
    assert!(result.is_ok());
}

#[test]
fn test_tokenizer_exposes_current_token() {
    let tokenizer = Tokenizer::new("'text'").unwrap();
    let token: &Token = tokenizer.current();
    assert_eq!(token.kind, TokenKind::String(StringStyle::Single));
    assert_eq!(token.lexeme, "text");
    assert_eq!(token.line, 1);
}

#[test]
fn test_tokenizer_advance_and_end() {
    let mut tokenizer = Tokenizer::new("x").unwrap();
    assert!(!tokenizer.is_at_end());
    tokenizer.advance().unwrap();
    assert!(tokenizer.is_at_end());
    assert_eq!(tokenizer.kind(), TokenKind::EndOfInput);
}

#[test]
fn test_tokens_serialize_to_json() {
    let tokens = Tokenizer::new("a..b").unwrap().tokenize().unwrap();
    let line = serde_json::to_string(&tokens[0]).unwrap();
    assert_eq!(line, r#"{"kind":"Range","lexeme":"a..b","line":1}"#);
}

// =============================================================================
// Dictionary Contract Tests
// =============================================================================

#[test]
fn test_dictionary_lookups() {
    assert!(dictionary::is_type("def"));
    assert_eq!(dictionary::keyword_rename("print"), Some("console.log"));
    assert_eq!(dictionary::operator_helper("*"), Some("multiply"));
    assert_eq!(
        dictionary::member_rename(Kind::Array, "findAll"),
        Some(MemberRename::Callback("filter"))
    );
    assert_eq!(dictionary::IMPLICIT_PARAMETER, "it");
}

// =============================================================================
// Scope Contract Tests
// =============================================================================

#[test]
fn test_scope_from_context_returns_result() {
    let result: Result<Scope, TranslateError> = Scope::from_context(&json!({"n": 1}));
    assert_eq!(result.unwrap().kind_of("n"), Kind::Number);
}

#[test]
fn test_scope_lookup_returns_entry() {
    let mut scope = Scope::new();
    scope.declare("m", Kind::Map, None);
    let entry = scope.lookup("m").unwrap();
    assert_eq!(entry.name, "m");
    assert_eq!(entry.kind, Kind::Map);
    assert!(entry.declaration.is_none());
}

// =============================================================================
// Analyser Contract Tests
// =============================================================================

#[test]
fn test_analyser_parse_returns_option() {
    let mut analyser = Analyser::new("x").unwrap();
    let first: Option<Node> = analyser.parse().unwrap();
    assert!(first.is_some());
    assert!(analyser.parse().unwrap().is_none());
}

#[test]
fn test_analyser_with_scope_uses_seeded_kinds() {
    let mut scope = Scope::new();
    scope.declare("a", Kind::Array, None);
    let mut analyser = Analyser::with_scope("a", scope).unwrap();
    assert_eq!(
        analyser.parse().unwrap(),
        Some(Node::variable("a", Kind::Array))
    );
}

#[test]
fn test_analyser_new_fails_on_lexical_error() {
    let result = Analyser::new("#");
    assert!(matches!(result, Err(ref e) if e.kind == ErrorKind::LexicalError));
}

// =============================================================================
// Converter Contract Tests
// =============================================================================

#[test]
fn test_convert_returns_string() {
    let result: Result<String, TranslateError> = convert("x = 1");
    assert_eq!(result.unwrap(), "x = 1");
}

#[test]
fn test_convert_with_context_borrows_value() {
    let context = json!({"a": [1]});
    let first = convert_with_context("a + 1", &context).unwrap();
    assert_eq!(first, "add(a, 1)");
    assert!(context.is_object());
}

#[test]
fn test_converter_builder() {
    let converter = Converter::new().with_context(json!({"s": "x"}));
    assert_eq!(converter.context(), &json!({"s": "x"}));
    assert_eq!(converter.convert("s.size()").unwrap(), "s.length");
}
