//! End-to-End CLI Integration Tests
//!
//! Tests the translator through the groovy_cli Session API.
//! This is the highest level integration test - script file to JavaScript.

use groovy_cli::{CliError, Session};
use serde_json::json;
use std::fs;

/// Test: translating a script file
#[test]
fn test_e2e_translate_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.groovy");
    fs::write(&path, "def add(a, b) {\n  return a + b\n}\nprintln 'hello'\n").unwrap();

    let mut session = Session::new();
    let output = session.translate_file(path.to_str().unwrap()).unwrap();

    assert_eq!(output, "function add(a, b) { return (a + b) }\nconsole.log('hello')");
}

/// Test: a context file seeds the kinds of free variables
#[test]
fn test_e2e_context_file() {
    let dir = tempfile::tempdir().unwrap();
    let context = dir.path().join("context.json");
    fs::write(&context, json!({"a": [1, 2], "n": 3}).to_string()).unwrap();

    let mut session = Session::new()
        .load_context(context.to_str().unwrap())
        .unwrap();

    assert_eq!(session.translate_string("a - 1").unwrap(), "subtract(a, 1)");
    assert_eq!(session.translate_string("n - 1").unwrap(), "(n - 1)");
}

/// Test: declarations carry over between REPL-style entries
#[test]
fn test_e2e_incremental_entries() {
    let mut session = Session::new();

    assert_eq!(session.translate_string("def a = [1]").unwrap(), "var a = [1]");
    assert_eq!(session.translate_string("a += 2").unwrap(), "a = add(a, 2)");
    assert_eq!(session.globals().len(), 1);

    session.reset().unwrap();
    assert!(session.globals().is_empty());
}

/// Test: a lexical error surfaces as a translate error
#[test]
fn test_e2e_lexical_error() {
    let mut session = Session::new();
    let result = session.translate_string("def s = 'open");

    match result {
        Err(CliError::Translate(e)) => assert!(e.to_string().starts_with("LexicalError (line 1)")),
        _ => panic!("Expected lexical error"),
    }
}
