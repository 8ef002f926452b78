//! Error Handling
//!
//! Unified error types for the application layer.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

use vidquiz_core::CoreError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Settings rejected by core validation
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// The completion client failed to produce a response
    #[error("Completion error: {0}")]
    Completion(String),

    /// The model answered but nothing usable could be parsed from it
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a completion error
    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }

    /// Create a generation failure
    pub fn generation_failed(msg: impl Into<String>) -> Self {
        Self::GenerationFailed(msg.into())
    }

    /// Whether the error means the model output was unusable
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, AppError::GenerationFailed(_))
    }
}
