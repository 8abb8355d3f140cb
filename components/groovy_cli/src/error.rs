//! Error types for the CLI

use core_types::TranslateError;

/// CLI-specific errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Lexical or context error raised by the translator
    #[error("{0}")]
    Translate(#[from] TranslateError),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Context file is not valid JSON, or tokens could not be serialised
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{ErrorKind, SourcePosition};

    #[test]
    fn test_translate_error_passes_through() {
        let error: CliError = TranslateError::new(
            ErrorKind::LexicalError,
            "Unterminated string",
            Some(SourcePosition::line(3)),
        )
        .into();
        assert_eq!(error.to_string(), "LexicalError (line 3): Unterminated string");
    }

    #[test]
    fn test_io_error_display() {
        let error: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(error.to_string(), "File error: gone");
    }

    #[test]
    fn test_json_error_conversion() {
        let error: CliError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(error, CliError::Json(_)));
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
