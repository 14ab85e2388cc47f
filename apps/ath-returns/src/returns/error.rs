//! Engine errors.

use thiserror::Error;

/// Errors from running the forward-return engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Dedicated thread pool could not be built.
    #[error("Failed to initialize thread pool: {message}")]
    ThreadPool {
        /// Error message.
        message: String,
    },
}
