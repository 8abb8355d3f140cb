//! Groovy-dialect to JavaScript translator
//!
//! Translates scripts written in a Groovy-like dialect into JavaScript
//! source text. Operators and collection methods whose meaning differs
//! between the two languages are rewritten based on the kind of value each
//! variable is known to hold.
//!
//! # Overview
//!
//! - [`Tokenizer`] - Classifies source characters into tokens
//! - [`Analyser`] - Recursive descent parser building nodes and scopes
//! - [`Node`] - Node model; `Display` renders JavaScript
//! - [`Scope`] - Lexical scope tree with per-binding kinds
//! - [`dictionary`] - Type names, renames and operator helpers
//! - [`Converter`] - Drives a whole translation
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use translator::{convert, convert_with_context};
//!
//! assert_eq!(convert("def a = 0..19;").unwrap(), "var a = range(0, 19);");
//!
//! let context = json!({"a": [1, 2, 3]});
//! assert_eq!(convert_with_context("a.size();", &context).unwrap(), "a.length;");
//! ```
//!
//! Generated code expects the runtime helpers `add`, `subtract`, `multiply`,
//! `bitwiseLeft`, `spaceship`, `range` and `times` to be in scope.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod codegen;
pub mod converter;
pub mod dictionary;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod scope;

pub use ast::{AssignOp, BinaryOp, ComparisonOp, Literal, LogicOp, Node, UnaryOp};
pub use converter::{convert, convert_with_context, Converter};
pub use lexer::{StringStyle, Token, TokenKind, Tokenizer};
pub use parser::Analyser;
pub use scope::{Scope, ScopeEntry};
