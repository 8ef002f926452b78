//! VidQuiz - Application Library
//!
//! Turns video transcripts into quizzes and grades learners' answers.
//! It includes:
//! - Question and summary generation over an injected completion client
//! - Learner progress tracking
//! - Settings persistence (JSON config)
//! - Re-exports of the parser and grading crates
//!
//! The parsing and grading algorithms live in the workspace crates
//! `vidquiz-parser` and `vidquiz-grading`; this crate wires them together.

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::settings::{QuizSettings, SettingsUpdate};
pub use services::{AnswerOutcome, CompletionClient, ProgressTracker, QuestionGenerator};
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};

// Core algorithms, re-exported for callers that only need parsing or grading
pub use vidquiz_core::{Difficulty, ParserConfig, ParserConfigBuilder, Question, QuestionType};
pub use vidquiz_grading::{is_correct, is_correct_with_options, normalize_answer, Score};
pub use vidquiz_parser::{detect_dialect, parse, parse_with_config, Dialect};
