//! Error types for the sift engine.

use thiserror::Error;

/// Query validation errors - surfaced to the caller, never retried.
///
/// Both variants are caller bugs: the inputs must be corrected before the
/// query can succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Page or page size was zero.
    #[error("invalid query: page and page size must be positive (got page {page}, page size {page_size})")]
    InvalidQuery { page: usize, page_size: usize },

    /// The sort key does not name a field of the record shape.
    #[error("unknown sort key '{key}'")]
    UnknownSortKey { key: String },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
