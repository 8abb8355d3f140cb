//! Translation driver

use crate::parser::Analyser;
use crate::scope::Scope;
use core_types::TranslateError;
use serde_json::Value;
use tracing::debug;

/// Translates whole source texts
///
/// A converter holds only configuration. Each call to [`Converter::convert`]
/// builds a fresh scope and analyser, so one converter can be reused.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use translator::Converter;
///
/// let converter = Converter::new().with_context(json!({"a": [1, 2]}));
/// assert_eq!(converter.convert("a - 1").unwrap(), "subtract(a, 1)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    context: Value,
}

impl Converter {
    /// Create a converter with an empty global scope
    pub fn new() -> Self {
        Self {
            context: Value::Null,
        }
    }

    /// Seed the global scope from the top-level keys of `context`
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }

    /// Context the global scope is seeded from
    pub fn context(&self) -> &Value {
        &self.context
    }

    /// Translate `source`, joining top-level statements with newlines
    pub fn convert(&self, source: &str) -> Result<String, TranslateError> {
        let scope = Scope::from_context(&self.context)?;
        let mut analyser = Analyser::with_scope(source, scope)?;

        let mut output: Vec<String> = Vec::new();
        while let Some(node) = analyser.parse()? {
            let text = node.to_string();
            debug!(statement = output.len(), output = %text, "converted");
            output.push(text);
        }
        Ok(output.join("\n"))
    }
}

/// Translate `source` with an empty global scope
pub fn convert(source: &str) -> Result<String, TranslateError> {
    Converter::new().convert(source)
}

/// Translate `source` with a global scope seeded from `context`
pub fn convert_with_context(source: &str, context: &Value) -> Result<String, TranslateError> {
    Converter::new().with_context(context.clone()).convert(source)
}
