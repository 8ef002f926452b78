//! Question and Summary Generation
//!
//! Drives one round trip to the model: build the prompt from a transcript,
//! send it through the injected [`CompletionClient`], and parse the reply.
//! An empty parse is reported as [`AppError::GenerationFailed`] so callers
//! can tell the user nothing usable came back.

use std::sync::Arc;

use async_trait::async_trait;

use vidquiz_core::Question;
use vidquiz_parser::{
    build_question_prompt, build_summary_prompt, parse_summary_bullets, parse_with_config,
};

use crate::models::settings::QuizSettings;
use crate::utils::error::{AppError, AppResult};

/// Text completion backend (Gemini, OpenAI, a local model, a test double).
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a prompt and return the raw response text.
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Generates quiz questions and summaries from video transcripts.
pub struct QuestionGenerator {
    client: Arc<dyn CompletionClient>,
    settings: QuizSettings,
}

impl QuestionGenerator {
    /// Create a generator with default settings
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self::with_settings(client, QuizSettings::default())
    }

    pub fn with_settings(client: Arc<dyn CompletionClient>, settings: QuizSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Ask the model for questions about `transcript` and parse them.
    pub async fn generate_questions(&self, transcript: &str) -> AppResult<Vec<Question>> {
        if transcript.trim().is_empty() {
            return Err(AppError::validation("No transcript available"));
        }

        let prompt = build_question_prompt(
            self.settings.prompt_dialect,
            transcript,
            self.settings.question_transcript_chars,
        );
        let response = self.client.complete(&prompt).await?;
        let questions = parse_with_config(&response, &self.settings.parser);

        if questions.is_empty() {
            tracing::warn!(
                "No questions parsed from a {}-char model response",
                response.len()
            );
            return Err(AppError::generation_failed(
                "No questions could be generated from the transcript",
            ));
        }

        tracing::info!("Generated {} questions", questions.len());
        Ok(questions)
    }

    /// Ask the model for a bullet-point summary of `transcript`.
    pub async fn generate_summary(&self, transcript: &str) -> AppResult<Vec<String>> {
        if transcript.trim().is_empty() {
            return Err(AppError::validation("No transcript available"));
        }

        let prompt = build_summary_prompt(
            transcript,
            self.settings.summary_transcript_chars,
            self.settings.summary_bullet_count,
        );
        let response = self.client.complete(&prompt).await?;
        let bullets = parse_summary_bullets(&response);

        if bullets.is_empty() {
            tracing::warn!("Summary response contained no bullet points");
            return Err(AppError::generation_failed("Failed to generate summary"));
        }

        Ok(bullets)
    }
}
