//! Error types for calculator core operations.
//!
//! Arithmetic failures never surface here; the engine folds those into the
//! `"Error"` display sentinel. These errors cover persistence and input
//! plumbing, and the CLI layer maps them to user-facing messages.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Core error type for calculator operations.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid user input (unknown key label, bad index)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        CalcError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Serialization(err.to_string())
    }
}
