//! Learner Progress Tracking
//!
//! In-memory progress store keyed by (user, video). The tracker is an
//! explicit object owned by whoever serves a session; `clear` ends the
//! session and drops every record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use vidquiz_core::Question;
use vidquiz_grading::{is_correct_with_options, ProgressRecord, Score};

use crate::utils::error::{AppError, AppResult};

/// Result of grading one submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: String,
    pub score: Score,
    pub completed: bool,
}

type ProgressKey = (String, String);

/// Grades answers and keeps per-video progress for each learner.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    records: RwLock<HashMap<ProgressKey, ProgressRecord>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grade `user_answer` against `question` and record the verdict.
    ///
    /// `question_count` is the number of questions generated for the video;
    /// progress is marked completed once that many distinct questions have
    /// a response.
    pub async fn submit_answer(
        &self,
        user_id: &str,
        video_id: &str,
        question: &Question,
        user_answer: &str,
        question_count: usize,
    ) -> AppResult<AnswerOutcome> {
        if user_id.trim().is_empty() || video_id.trim().is_empty() {
            return Err(AppError::validation(
                "Missing required fields: user_id, video_id",
            ));
        }

        let is_correct = is_correct_with_options(
            Some(user_answer),
            Some(&question.correct_answer),
            &question.options,
        );

        let mut records = self.records.write().await;
        let record = records
            .entry((user_id.to_string(), video_id.to_string()))
            .or_insert_with(|| ProgressRecord::new(user_id, video_id));
        let score = record.record_response(&question.id, user_answer, is_correct, question_count);

        tracing::debug!(
            "Saved response for user {}, question {}, correct: {}",
            user_id,
            question.id,
            is_correct
        );

        Ok(AnswerOutcome {
            is_correct,
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
            score,
            completed: record.completed,
        })
    }

    /// Snapshot of a learner's progress on a video
    pub async fn progress(&self, user_id: &str, video_id: &str) -> Option<ProgressRecord> {
        let records = self.records.read().await;
        records
            .get(&(user_id.to_string(), video_id.to_string()))
            .cloned()
    }

    /// Current score, zero when nothing was answered
    pub async fn score(&self, user_id: &str, video_id: &str) -> Score {
        self.progress(user_id, video_id)
            .await
            .map(|p| p.score)
            .unwrap_or_default()
    }

    /// Forget a learner's progress on one video.
    ///
    /// Returns whether anything was removed.
    pub async fn reset(&self, user_id: &str, video_id: &str) -> bool {
        let mut records = self.records.write().await;
        let removed = records
            .remove(&(user_id.to_string(), video_id.to_string()))
            .is_some();
        if removed {
            tracing::info!("Reset progress for user {}, video {}", user_id, video_id);
        }
        removed
    }

    /// Drop every record (end of session)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}
