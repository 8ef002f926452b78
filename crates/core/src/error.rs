//! Core Error Types
//!
//! Defines the foundational error type used across the VidQuiz workspace.
//!
//! Parsing and grading are total and never fail; the only fallible core
//! operation is configuration validation. The application layer wraps
//! `CoreError` in its own error type.

use thiserror::Error;

/// Core error type for the VidQuiz workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
