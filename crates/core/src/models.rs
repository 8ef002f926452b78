//! Question Models
//!
//! Typed question records recovered from LLM output, plus the mutable draft
//! that parsers accumulate while scanning a block of text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical question type.
///
/// Every dialect-specific label ("multiple-choice", "True/False",
/// "fill-in-the-blank", ...) is resolved into this closed set at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Lettered multiple choice
    Mcq,
    /// True/False statement
    TrueFalse,
    /// Free-text short answer
    ShortAnswer,
}

impl QuestionType {
    /// Resolve a free-form type label.
    ///
    /// Contains "multiple" -> `Mcq`; contains "true" or "false" -> `TrueFalse`;
    /// anything else (including "fill" and "short") -> `ShortAnswer`.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("multiple") {
            QuestionType::Mcq
        } else if lower.contains("true") || lower.contains("false") {
            QuestionType::TrueFalse
        } else {
            QuestionType::ShortAnswer
        }
    }

    /// Wire name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::TrueFalse => "true_false",
            QuestionType::ShortAnswer => "short_answer",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Question difficulty, `Medium` unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Match an exact `Easy`/`Medium`/`Hard` label.
    pub fn from_exact(label: &str) -> Option<Self> {
        match label.trim() {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Resolve by first letter: `e` -> Easy, `h` -> Hard, anything else -> Medium.
    pub fn from_initial(label: &str) -> Self {
        match label.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('e') => Difficulty::Easy,
            Some('h') => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully parsed question.
///
/// Only produced through [`QuestionDraft::finish`], so `text` and
/// `correct_answer` are non-empty and `options` agree with `question_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier derived from the source marker ("1", "TF1", "SA2") or a
    /// block ordinal; stable within one parse only
    pub id: String,
    /// Question prompt
    pub text: String,
    /// Canonical type
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Choices; `["True", "False"]` for true/false, empty for short answer
    pub options: Vec<String>,
    /// Canonical correct answer
    pub correct_answer: String,
    /// Explanation shown after answering
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl Question {
    /// Canonical options of every true/false question
    pub fn true_false_options() -> Vec<String> {
        vec!["True".to_string(), "False".to_string()]
    }

    /// Whether the question renders lettered choices
    pub fn has_choices(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Why a draft could not become a [`Question`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftRejection {
    #[error("question text is empty")]
    MissingText,
    #[error("correct answer is empty")]
    MissingAnswer,
    #[error("question type is unresolved")]
    MissingType,
}

/// Accumulator for one block of LLM output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: String,
    pub text: String,
    pub question_type: Option<QuestionType>,
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionDraft {
    /// Start a draft for the given id and (possibly empty) prompt text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Start a draft with a known type.
    pub fn typed(
        id: impl Into<String>,
        text: impl Into<String>,
        question_type: QuestionType,
    ) -> Self {
        Self {
            question_type: Some(question_type),
            ..Self::new(id, text)
        }
    }

    /// Validate the draft and build the immutable question.
    ///
    /// Options are canonicalized per type: true/false always gets
    /// `["True", "False"]`, short answer never carries options.
    pub fn finish(self, default_explanation: &str) -> Result<Question, DraftRejection> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(DraftRejection::MissingText);
        }
        let correct_answer = self
            .correct_answer
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(DraftRejection::MissingAnswer)?;
        let question_type = self.question_type.ok_or(DraftRejection::MissingType)?;

        let options = match question_type {
            QuestionType::TrueFalse => Question::true_false_options(),
            QuestionType::ShortAnswer => Vec::new(),
            QuestionType::Mcq => self.options,
        };
        let explanation = self
            .explanation
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(default_explanation);

        Ok(Question {
            id: self.id,
            text: text.to_string(),
            question_type,
            options,
            correct_answer: correct_answer.to_string(),
            explanation: explanation.to_string(),
            difficulty: self.difficulty.unwrap_or_default(),
        })
    }
}
