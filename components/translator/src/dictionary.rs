//! Static lookup tables: type names, keyword renames, member renames and
//! operator helpers
//!
//! Every function here is a pure lookup. Nothing in this module knows about
//! tokens or nodes.

use core_types::Kind;

/// Name bound inside a closure that declares no parameters
pub const IMPLICIT_PARAMETER: &str = "it";

/// Words that can never be used as a variable name
const RESERVED_WORDS: &[&str] = &[
    "as", "assert", "break", "case", "class", "default", "do", "else", "false", "for", "if", "in",
    "new", "null", "return", "switch", "true", "while",
];

/// How a member access is rewritten for a receiver of a known kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRename {
    /// `receiver.name(args)`
    Method(&'static str),
    /// `receiver.name(args)` where a closure argument's last expression is
    /// its return value
    Callback(&'static str),
    /// `receiver.name`, arguments dropped
    Property(&'static str),
    /// `name(receiver, args)`, a runtime helper
    Helper(&'static str),
    /// `prefix receiver suffix`, arguments dropped
    Wrapped {
        /// Text before the receiver
        prefix: &'static str,
        /// Text after the receiver
        suffix: &'static str,
    },
}

/// How a cast to a named type is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastRule {
    /// `parseInt(x)`
    ParseInt,
    /// `parseFloat(x)`
    ParseFloat,
    /// `x.toString()`
    ToString,
    /// `x`
    PassThrough,
}

/// Kind tracked for a declaration written with type `name`
///
/// Returns `None` when `name` is not a known type.
///
/// # Examples
///
/// ```
/// use core_types::Kind;
/// use translator::dictionary::type_kind;
///
/// assert_eq!(type_kind("int"), Some(Kind::Number));
/// assert_eq!(type_kind("def"), Some(Kind::Any));
/// assert_eq!(type_kind("Foo"), None);
/// ```
pub fn type_kind(name: &str) -> Option<Kind> {
    let kind = match name {
        "def" | "var" | "Object" | "void" => Kind::Any,
        "byte" | "short" | "int" | "long" | "Byte" | "Short" | "Integer" | "Long"
        | "BigInteger" => Kind::Number,
        "float" | "double" | "Float" | "Double" | "BigDecimal" | "Number" => Kind::Number,
        "String" | "char" | "Character" | "GString" => Kind::String,
        "boolean" | "Boolean" => Kind::Boolean,
        "List" | "ArrayList" | "LinkedList" | "Set" | "HashSet" | "Collection" => Kind::Array,
        "Map" | "HashMap" | "LinkedHashMap" | "TreeMap" => Kind::Map,
        "Closure" => Kind::Function,
        _ => return None,
    };
    Some(kind)
}

/// Whether `name` is a known type name
pub fn is_type(name: &str) -> bool {
    type_kind(name).is_some()
}

/// Whether `name` is reserved by the grammar
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Replacement for a bare call target, e.g. `println` → `console.log`
pub fn keyword_rename(name: &str) -> Option<&'static str> {
    match name {
        "println" | "print" => Some("console.log"),
        "assert" => Some("console.assert"),
        _ => None,
    }
}

/// JavaScript literal for `new name()` of a collection type
pub fn constructor_literal(name: &str) -> Option<&'static str> {
    match constructor_kind(name)? {
        Kind::Array => Some("[]"),
        Kind::Map => Some("{}"),
        _ => None,
    }
}

/// Kind of the value produced by `new name()`, for collection types only
pub fn constructor_kind(name: &str) -> Option<Kind> {
    match type_kind(name)? {
        kind @ (Kind::Array | Kind::Map) => Some(kind),
        _ => None,
    }
}

/// Runtime helper implementing `symbol` for non-primitive operands
pub fn operator_helper(symbol: &str) -> Option<&'static str> {
    match symbol {
        "+" => Some("add"),
        "-" => Some("subtract"),
        "*" => Some("multiply"),
        "<<" => Some("bitwiseLeft"),
        "<=>" => Some("spaceship"),
        _ => None,
    }
}

/// Rewrite of `receiver.name` for a receiver of `kind`
///
/// `None` means the member is emitted as written.
///
/// # Examples
///
/// ```
/// use core_types::Kind;
/// use translator::dictionary::{member_rename, MemberRename};
///
/// assert_eq!(member_rename(Kind::Array, "collect"), Some(MemberRename::Callback("map")));
/// assert_eq!(member_rename(Kind::Array, "size"), Some(MemberRename::Property("length")));
/// assert_eq!(member_rename(Kind::Any, "collect"), None);
/// ```
pub fn member_rename(kind: Kind, name: &str) -> Option<MemberRename> {
    use MemberRename::*;

    match (kind, name) {
        (Kind::Array, "add") => Some(Method("push")),
        (Kind::Array, "each" | "eachWithIndex") => Some(Method("forEach")),
        (Kind::Array, "collect") => Some(Callback("map")),
        (Kind::Array, "findAll") => Some(Callback("filter")),
        (Kind::Array, "find") => Some(Callback("find")),
        (Kind::Array, "any") => Some(Callback("some")),
        (Kind::Array, "every") => Some(Callback("every")),
        (Kind::Array, "size") => Some(Property("length")),

        (Kind::Map, "containsKey") => Some(Method("hasOwnProperty")),
        (Kind::Map, "size") => Some(Wrapped {
            prefix: "Object.keys(",
            suffix: ").length",
        }),
        (Kind::Map, "keySet") => Some(Wrapped {
            prefix: "Object.keys(",
            suffix: ")",
        }),
        (Kind::Map, "values") => Some(Wrapped {
            prefix: "Object.values(",
            suffix: ")",
        }),

        (Kind::String, "size" | "length") => Some(Property("length")),

        (Kind::Number, "times") => Some(Helper("times")),

        _ => None,
    }
}

/// Cast rendering for a target type name
pub fn cast_rule(type_name: &str) -> CastRule {
    match type_name {
        "byte" | "short" | "int" | "long" | "Byte" | "Short" | "Integer" | "Long"
        | "BigInteger" => CastRule::ParseInt,
        "float" | "double" | "Float" | "Double" | "BigDecimal" | "Number" => {
            CastRule::ParseFloat
        }
        "String" | "char" | "Character" | "GString" => CastRule::ToString,
        _ => CastRule::PassThrough,
    }
}
