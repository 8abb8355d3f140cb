//! Unit tests for Kind

use core_types::Kind;
use serde_json::json;

#[test]
fn test_kind_default_is_any() {
    assert_eq!(Kind::default(), Kind::Any);
}

#[test]
fn test_kind_from_nested_context_only_looks_at_top_value() {
    let value = json!({"inner": [1, 2, 3]});
    assert_eq!(Kind::from_json(&value), Kind::Map);
    assert_eq!(Kind::from_json(&value["inner"]), Kind::Array);
}

#[test]
fn test_kind_type_of_names() {
    let names: Vec<&str> = [
        Kind::Number,
        Kind::String,
        Kind::Boolean,
        Kind::Array,
        Kind::Map,
        Kind::Function,
        Kind::Any,
    ]
    .iter()
    .map(|k| k.type_of())
    .collect();
    assert_eq!(
        names,
        vec!["number", "string", "boolean", "array", "map", "function", "any"]
    );
}

#[test]
fn test_kind_deserializes_from_name() {
    let kind: Kind = serde_json::from_str("\"Function\"").unwrap();
    assert_eq!(kind, Kind::Function);
}
