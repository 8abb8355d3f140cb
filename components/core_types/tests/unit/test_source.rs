//! Unit tests for SourcePosition

use core_types::SourcePosition;

#[test]
fn test_source_position_fields() {
    let pos = SourcePosition { line: 3, column: 9 };
    assert_eq!(pos.line, 3);
    assert_eq!(pos.column, 9);
}

#[test]
fn test_source_position_copy_and_eq() {
    let a = SourcePosition::line(5);
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, SourcePosition::line(6));
}

#[test]
fn test_source_position_serializes_as_object() {
    let text = serde_json::to_string(&SourcePosition { line: 2, column: 1 }).unwrap();
    assert_eq!(text, r#"{"line":2,"column":1}"#);
}
