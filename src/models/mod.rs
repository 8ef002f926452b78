//! Data Models
//!
//! Application-level data structures. Question records live in
//! `vidquiz_core` and progress records in `vidquiz_grading`; both are
//! re-exported here for convenience.

pub mod settings;

pub use settings::{QuizSettings, SettingsUpdate};
pub use vidquiz_core::{Difficulty, Question, QuestionType};
pub use vidquiz_grading::{ProgressRecord, ResponseRecord, Score};
