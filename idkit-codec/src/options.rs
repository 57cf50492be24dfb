//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Nesting depth allowed when the input is not trusted.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Configuration for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Maximum number of nested values a decode may enter.
    pub max_depth: usize,
}

impl DecodeOptions {
    /// Limits suitable for input from outside the process.
    #[must_use]
    pub const fn untrusted() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// No practical depth limit.
    #[must_use]
    pub const fn trusted() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::untrusted()
    }
}
