//! Groovy-dialect to JavaScript CLI library
//!
//! Provides the [`Session`] struct and supporting modules for the `groovy2js`
//! command-line front-end.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod session;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use session::Session;
