//! Error types for gadd.

use thiserror::Error;

use crate::config::PatternKey;

/// Main error type for gadd.
#[derive(Debug, Error)]
pub enum GaddError {
    /// Pattern file could not be parsed
    #[error("line {line}: {message}")]
    ConfigSyntax { line: usize, message: String },

    /// Pattern file has no section for gadd
    #[error("missing [{0}] section")]
    MissingSection(String),

    /// A stored or supplied pattern is not usable
    #[error("invalid {key} pattern '{pattern}': {reason}")]
    InvalidPattern {
        key: PatternKey,
        pattern: String,
        reason: String,
    },

    /// Staged files could not be listed
    #[error("git error: {0}")]
    Git(String),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
