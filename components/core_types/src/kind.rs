//! The light static type tag tracked for every variable binding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of value a binding is known to hold.
///
/// Kinds are computed once, when a binding is declared, and decide whether
/// an operator or member access can be emitted verbatim or needs a runtime
/// helper.
///
/// # Examples
///
/// ```
/// use core_types::Kind;
///
/// assert_eq!(Kind::default(), Kind::Any);
/// assert_eq!(Kind::Array.type_of(), "array");
/// assert!(Kind::Map.is_collection());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Kind {
    /// Integer or decimal number
    Number,
    /// Character sequence
    String,
    /// `true` / `false`
    Boolean,
    /// List, including range sequences
    Array,
    /// Key/value map
    Map,
    /// Closure or named function
    Function,
    /// Anything the tracker could not prove
    #[default]
    Any,
}

impl Kind {
    /// Kind of a JSON value, used to seed a scope from a context tree
    ///
    /// `null` carries no information and maps to [`Kind::Any`].
    pub fn from_json(value: &Value) -> Kind {
        match value {
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Boolean,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Map,
            Value::Null => Kind::Any,
        }
    }

    /// Lower-case name of the kind
    pub fn type_of(&self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Function => "function",
            Kind::Any => "any",
        }
    }

    /// Array or Map
    pub fn is_collection(&self) -> bool {
        matches!(self, Kind::Array | Kind::Map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_json() {
        assert_eq!(Kind::from_json(&json!(1.5)), Kind::Number);
        assert_eq!(Kind::from_json(&json!("s")), Kind::String);
        assert_eq!(Kind::from_json(&json!(false)), Kind::Boolean);
        assert_eq!(Kind::from_json(&json!([])), Kind::Array);
        assert_eq!(Kind::from_json(&json!({"a": 1})), Kind::Map);
        assert_eq!(Kind::from_json(&json!(null)), Kind::Any);
    }

    #[test]
    fn test_kind_serde_round_name() {
        let text = serde_json::to_string(&Kind::Array).unwrap();
        assert_eq!(text, "\"Array\"");
    }
}
