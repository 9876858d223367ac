//! Error types for wal-show core operations.
//!
//! Errors are descriptive at the core level; the CLI layer adds context
//! about which file or stream was involved.

use thiserror::Error;

/// Result type alias for wal-show operations.
pub type Result<T> = std::result::Result<T, WalShowError>;

/// Core error type for wal-show operations.
#[derive(Debug, Error)]
pub enum WalShowError {
    /// Timelines could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing to the output destination failed
    #[error("Output error: {0}")]
    Io(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for WalShowError {
    fn from(err: std::io::Error) -> Self {
        WalShowError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalShowError {
    fn from(err: serde_json::Error) -> Self {
        WalShowError::Serialization(err.to_string())
    }
}
