//! VidQuiz Parser
//!
//! Turns raw LLM text into typed records. Two question dialects are
//! understood and told apart automatically:
//!
//! - `marker` - inline markers (`1.`, `TF1.`, `SA1.`) followed by option,
//!   `Answer:`, `Explanation:` and `Difficulty:` lines
//! - `bold_field` - blocks opened by `**Question:**` with `**Field:**` lines
//!
//! `dispatch` holds the single entry point (`parse`) that inspects a response
//! and routes it to the matching dialect. `summary` extracts bullet points and
//! `prompt` builds the prompts that ask a model for either format.
//!
//! Nothing in this crate returns an error: malformed blocks are dropped and
//! an unusable response yields an empty list.

pub mod bold_field;
pub mod dispatch;
pub mod marker;
pub mod prompt;
pub mod summary;

pub use bold_field::{parse_bold_field_questions, QUESTION_DELIMITER};
pub use dispatch::{detect_dialect, parse, parse_as, parse_with_config, Dialect};
pub use marker::parse_marker_questions;
pub use prompt::{
    build_bold_field_question_prompt, build_marker_question_prompt, build_question_prompt,
    build_summary_prompt, truncate_chars,
};
pub use summary::parse_summary_bullets;
