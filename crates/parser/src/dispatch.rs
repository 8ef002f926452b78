//! Dialect Detection and Dispatch
//!
//! Single entry point for question parsing. Callers hand over the raw model
//! response without saying which prompt produced it; the dialect is chosen
//! from the text itself.

use serde::{Deserialize, Serialize};

use vidquiz_core::{ParserConfig, Question};

use crate::bold_field::{parse_bold_field_questions, QUESTION_DELIMITER};
use crate::marker::parse_marker_questions;

/// Question response formats understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `1.` / `TF1.` / `SA1.` markers with labelled lines
    #[default]
    Marker,
    /// `**Question:**` blocks with `**Field:**` lines
    BoldField,
}

impl Dialect {
    /// Detect the dialect of a response: the `**Question:**` delimiter
    /// selects `BoldField`, its absence selects `Marker`.
    pub fn detect(text: &str) -> Self {
        if text.contains(QUESTION_DELIMITER) {
            Dialect::BoldField
        } else {
            Dialect::Marker
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Marker => "marker",
            Dialect::BoldField => "bold_field",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect the dialect of a response.
pub fn detect_dialect(text: &str) -> Dialect {
    Dialect::detect(text)
}

/// Parse questions from a response using the default configuration.
///
/// Never fails: an empty or unusable response yields an empty list.
pub fn parse(text: &str) -> Vec<Question> {
    parse_with_config(text, &ParserConfig::default())
}

/// Parse questions from a response, detecting its dialect.
pub fn parse_with_config(text: &str, config: &ParserConfig) -> Vec<Question> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let dialect = Dialect::detect(text);
    tracing::debug!("Parsing {} chars as {} dialect", text.len(), dialect);
    parse_as(dialect, text, config)
}

/// Parse questions with an explicitly chosen dialect.
pub fn parse_as(dialect: Dialect, text: &str, config: &ParserConfig) -> Vec<Question> {
    match dialect {
        Dialect::Marker => parse_marker_questions(text, config),
        Dialect::BoldField => parse_bold_field_questions(text, config),
    }
}
