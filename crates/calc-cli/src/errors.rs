//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (history entry)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\nHint: {}", message, hint)
            }
            CliError::InvalidInput { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\nHint: {}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// The message without its hint.
    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. } | CliError::InvalidInput { message, .. } => message,
        }
    }

    /// The hint, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}
