//! Integration test suite for the Groovy-dialect to JavaScript translator
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use groovy_cli;
    pub use translator;
}
