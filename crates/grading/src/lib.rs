//! VidQuiz Grading
//!
//! Decides whether a learner's free-text answer matches the canonical answer
//! of a question, and aggregates verdicts into per-video progress.
//!
//! - `normalizer` - answer normalization and the correctness verdict
//! - `score` - score aggregation and per-video response history
//!
//! Everything here is pure and synchronous; verdicts never fail, empty or
//! missing inputs are simply incorrect.

pub mod normalizer;
pub mod score;

pub use normalizer::{is_correct, is_correct_with_options, normalize_answer, resolve_option_letter};
pub use score::{ProgressRecord, ResponseRecord, Score};
