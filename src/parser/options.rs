use serde::{Deserialize, Serialize};

/// Default bound on nested blocks and parentheses
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser configuration
///
/// Deserializes from any serde format; missing fields take their defaults:
///
/// ```rust
/// use minnow::parser::ParseOptions;
///
/// let options = ParseOptions::default().max_depth(32);
/// assert_eq!(options.max_depth, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum nesting of `if`/`while` bodies and parenthesized expressions.
    /// Each body and each `(` counts one level; 0 rejects both.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Sets the nesting limit
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
