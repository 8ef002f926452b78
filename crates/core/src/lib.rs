//! VidQuiz Core
//!
//! Foundational records, error types, and configuration for the VidQuiz
//! workspace. This crate has zero dependencies on the parsing, grading or
//! application layers.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `models` - Question records (`Question`, `QuestionType`, `Difficulty`, `QuestionDraft`)
//! - `builders` - Parser configuration and its validating builder
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/thiserror** - keeps build times minimal
//! 2. **Closed enums for canonical values** - dialect-specific labels are resolved at the edge
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod builders;
pub mod error;
pub mod models;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Question Records ───────────────────────────────────────────────────
pub use models::{Difficulty, DraftRejection, Question, QuestionDraft, QuestionType};

// ── Configuration ──────────────────────────────────────────────────────
pub use builders::{ParserConfig, ParserConfigBuilder, DEFAULT_EXPLANATION};
