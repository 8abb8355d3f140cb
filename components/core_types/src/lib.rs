//! Shared types for the Groovy-dialect to JavaScript translator.
//!
//! This crate provides the error type every component reports through, the
//! source position attached to those errors, and the [`Kind`] tag the
//! translator tracks for each variable binding.
//!
//! # Overview
//!
//! - [`TranslateError`] - Lexical, syntax and context errors with a source line
//! - [`ErrorKind`] - Category of a [`TranslateError`]
//! - [`SourcePosition`] - Source code location
//! - [`Kind`] - Light static type tag of a value
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, Kind, SourcePosition, TranslateError};
//!
//! let error = TranslateError::new(
//!     ErrorKind::LexicalError,
//!     "Malformed number '1...2'",
//!     Some(SourcePosition::line(1)),
//! );
//! assert_eq!(error.to_string(), "LexicalError (line 1): Malformed number '1...2'");
//!
//! assert_eq!(Kind::from_json(&serde_json::json!([1, 2])), Kind::Array);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod kind;
mod source;

pub use error::{ErrorKind, TranslateError};
pub use kind::Kind;
pub use source::SourcePosition;
