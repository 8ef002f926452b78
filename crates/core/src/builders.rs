//! Parser Configuration Builder
//!
//! The builder follows the standard Rust builder pattern:
//! 1. Create with `::new()` or `::default()`
//! 2. Chain `.field(value)` calls
//! 3. Call `.build()` which validates and returns `CoreResult<ParserConfig>`
//!
//! Validation happens at build time, catching configuration errors
//! before they cause surprising parse results.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Placeholder explanation for questions the model did not explain.
pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";

/// Default cap on questions returned from marker-style responses.
const DEFAULT_MARKER_QUESTION_LIMIT: usize = 10;

/// Parser configuration (output of ParserConfigBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of questions kept from a marker-style (`1.`, `TF1.`,
    /// `SA1.`) response; extras are discarded in document order
    pub marker_question_limit: usize,
    /// Explanation used when a block has none
    pub default_explanation: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            marker_question_limit: DEFAULT_MARKER_QUESTION_LIMIT,
            default_explanation: DEFAULT_EXPLANATION.to_string(),
        }
    }
}

impl ParserConfig {
    /// Check the invariants the builder enforces.
    pub fn validate(&self) -> CoreResult<()> {
        if self.marker_question_limit == 0 {
            return Err(CoreError::validation("marker_question_limit must be > 0"));
        }
        if self.default_explanation.trim().is_empty() {
            return Err(CoreError::validation(
                "default_explanation cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Builder for parser configuration with validation at build time.
///
/// # Example
/// ```ignore
/// let config = ParserConfigBuilder::new()
///     .marker_question_limit(5)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    marker_question_limit: Option<usize>,
    default_explanation: Option<String>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker-style question cap (must be > 0).
    pub fn marker_question_limit(mut self, n: usize) -> Self {
        self.marker_question_limit = Some(n);
        self
    }

    /// Set the placeholder explanation (must not be blank).
    pub fn default_explanation(mut self, text: impl Into<String>) -> Self {
        self.default_explanation = Some(text.into());
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> CoreResult<ParserConfig> {
        let config = ParserConfig {
            marker_question_limit: self
                .marker_question_limit
                .unwrap_or(DEFAULT_MARKER_QUESTION_LIMIT),
            default_explanation: self
                .default_explanation
                .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}
