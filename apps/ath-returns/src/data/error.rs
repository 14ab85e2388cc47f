//! Data source error types.

use thiserror::Error;

/// Errors raised while loading price observations.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// IO error reading data.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number (0 when unknown).
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A required CSV column is missing from the header.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
