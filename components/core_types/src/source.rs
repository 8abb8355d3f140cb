//! Source position type for error tracking.

use serde::{Deserialize, Serialize};

/// Represents a position in dialect source code.
///
/// The tokenizer only tracks lines, so `column` is `0` unless a caller
/// knows better.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition { line: 10, column: 5 };
/// assert_eq!(pos.line, 10);
/// assert_eq!(SourcePosition::line(3).column, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, 0 when unknown)
    pub column: u32,
}

impl SourcePosition {
    /// Position on `line` with an unknown column
    pub fn line(line: u32) -> Self {
        Self { line, column: 0 }
    }
}
