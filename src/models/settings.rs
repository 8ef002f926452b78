//! Settings Models
//!
//! Quiz generation settings stored in settings.json.

use serde::{Deserialize, Serialize};

use vidquiz_core::{CoreError, CoreResult, ParserConfig};
use vidquiz_parser::Dialect;

/// Quiz generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Question parser settings
    pub parser: ParserConfig,
    /// Transcript characters sent with a question prompt
    pub question_transcript_chars: usize,
    /// Transcript characters sent with a summary prompt
    pub summary_transcript_chars: usize,
    /// Bullet points requested per summary
    pub summary_bullet_count: usize,
    /// Response format requested from the model
    pub prompt_dialect: Dialect,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            question_transcript_chars: 3000,
            summary_transcript_chars: 10000,
            summary_bullet_count: 3,
            prompt_dialect: Dialect::Marker,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub marker_question_limit: Option<usize>,
    pub default_explanation: Option<String>,
    pub question_transcript_chars: Option<usize>,
    pub summary_transcript_chars: Option<usize>,
    pub summary_bullet_count: Option<usize>,
    pub prompt_dialect: Option<Dialect>,
}

impl QuizSettings {
    /// Apply a partial update
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(limit) = update.marker_question_limit {
            self.parser.marker_question_limit = limit;
        }
        if let Some(explanation) = update.default_explanation {
            self.parser.default_explanation = explanation;
        }
        if let Some(chars) = update.question_transcript_chars {
            self.question_transcript_chars = chars;
        }
        if let Some(chars) = update.summary_transcript_chars {
            self.summary_transcript_chars = chars;
        }
        if let Some(count) = update.summary_bullet_count {
            self.summary_bullet_count = count;
        }
        if let Some(dialect) = update.prompt_dialect {
            self.prompt_dialect = dialect;
        }
    }

    /// Validate settings
    pub fn validate(&self) -> CoreResult<()> {
        self.parser.validate()?;

        if self.question_transcript_chars == 0 {
            return Err(CoreError::validation("question_transcript_chars must be > 0"));
        }
        if self.summary_transcript_chars == 0 {
            return Err(CoreError::validation("summary_transcript_chars must be > 0"));
        }
        if self.summary_bullet_count == 0 {
            return Err(CoreError::validation("summary_bullet_count must be > 0"));
        }

        Ok(())
    }
}
