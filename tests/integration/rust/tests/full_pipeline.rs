//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Tokenizer -> Analyser -> Node -> JavaScript
//! against the one-call Converter entry points.

use core_types::{ErrorKind, Kind};
use serde_json::json;
use translator::{convert, convert_with_context, Analyser, Node, Scope, TokenKind, Tokenizer};

/// Helper function running the analyser by hand
fn translate_by_hand(source: &str, scope: Scope) -> Vec<String> {
    let mut analyser = Analyser::with_scope(source, scope).expect("Tokenizer failed");
    analyser
        .parse_all()
        .expect("Translation failed")
        .iter()
        .map(Node::to_string)
        .collect()
}

/// Test: the analyser and the converter agree statement by statement
#[test]
fn test_full_pipeline_matches_converter() {
    let source = "def a = [1,2,3]; a - 1;";
    let lines = translate_by_hand(source, Scope::new());

    assert_eq!(lines, vec!["var a = [1, 2, 3];", "subtract(a, 1);"]);
    assert_eq!(convert(source).unwrap(), lines.join("\n"));
}

/// Test: constant arithmetic stays native
#[test]
fn test_full_pipeline_constant_addition() {
    assert_eq!(convert("2 + 3").unwrap(), "(2 + 3)");
}

/// Test: ranges become helper calls
#[test]
fn test_full_pipeline_range() {
    assert_eq!(convert("def a = 0..19;").unwrap(), "var a = range(0, 19);");
}

/// Test: context seeding drives closure and member rewriting
#[test]
fn test_full_pipeline_context_array() {
    let context = json!({"a": [1, 2, 3]});

    assert_eq!(
        convert_with_context("a.each { it; }", &context).unwrap(),
        "a.forEach(function(it){ it; })"
    );
    assert_eq!(convert_with_context("a.size();", &context).unwrap(), "a.length;");
}

/// Test: a seeded scope reaches the analyser unchanged
#[test]
fn test_full_pipeline_seeded_scope() {
    let scope = Scope::from_context(&json!({"a": [], "n": 1})).unwrap();
    assert_eq!(scope.kind_of("a"), Kind::Array);
    assert_eq!(scope.kind_of("n"), Kind::Number);

    assert_eq!(translate_by_hand("n + 1", scope), vec!["(n + 1)"]);
}

/// Test: the analyser records declared kinds in its scope
#[test]
fn test_full_pipeline_scope_after_parse() {
    let mut analyser = Analyser::new("def m = [:]\ndef l = new ArrayList()").unwrap();
    analyser.parse_all().unwrap();

    let scope = analyser.into_scope();
    assert_eq!(scope.kind_of("m"), Kind::Map);
    assert_eq!(scope.kind_of("l"), Kind::Array);
}

/// Test: tokens carry their lines through to the end marker
#[test]
fn test_full_pipeline_token_lines() {
    let tokens = Tokenizer::new("a = 1\nb").unwrap().tokenize().unwrap();
    let last = tokens.last().unwrap();

    assert_eq!(last.kind, TokenKind::EndOfInput);
    assert_eq!(last.line, 2);
}

/// Test: a syntax error is local to its statement
#[test]
fn test_full_pipeline_syntax_error_recovery() {
    let output = convert("1 ? 2\ndef ok = 2").unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("/* SyntaxError"));
    assert!(lines[0].contains("':'"));
    assert_eq!(lines[1], "var ok = 2");
}

/// Test: a lexical error aborts the whole job
#[test]
fn test_full_pipeline_lexical_error() {
    let error = convert("def a = 1\n1...2").unwrap_err();

    assert_eq!(error.kind, ErrorKind::LexicalError);
    assert_eq!(error.line(), Some(2));
}

/// Test: a non-object context is rejected before parsing
#[test]
fn test_full_pipeline_context_error() {
    let error = convert_with_context("a", &json!([1])).unwrap_err();
    assert_eq!(error.kind, ErrorKind::ContextError);
}
