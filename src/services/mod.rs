//! Services
//!
//! Business logic on top of the parser and grading crates: talking to the
//! completion backend and tracking learner progress.

pub mod generation;
pub mod progress;

pub use generation::{CompletionClient, QuestionGenerator};
pub use progress::{AnswerOutcome, ProgressTracker};
