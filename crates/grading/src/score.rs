//! Score Aggregation
//!
//! Per-video response history for one learner. A question answered twice
//! keeps only its latest response, and the score is recomputed from the
//! retained responses after every submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Correct/total tally with a rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    /// `round(correct / total * 100)`, 0 when nothing was answered
    pub percentage: u32,
}

impl Score {
    pub fn new(correct: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            correct,
            total,
            percentage,
        }
    }

    /// Tally a sequence of correctness verdicts.
    pub fn from_verdicts<I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let (correct, total) = verdicts
            .into_iter()
            .fold((0, 0), |(correct, total), verdict| {
                (correct + usize::from(verdict), total + 1)
            });
        Self::new(correct, total)
    }
}

/// One graded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub question_id: String,
    pub user_answer: String,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

/// A learner's progress through the questions of one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_id: String,
    pub video_id: String,
    pub responses: Vec<ResponseRecord>,
    pub score: Score,
    /// Set once every question of the video has a response
    pub completed: bool,
    pub last_accessed: DateTime<Utc>,
}

impl ProgressRecord {
    pub fn new(user_id: impl Into<String>, video_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            video_id: video_id.into(),
            responses: Vec::new(),
            score: Score::default(),
            completed: false,
            last_accessed: Utc::now(),
        }
    }

    /// Record a graded answer, replacing any earlier response to the same
    /// question, and return the updated score.
    ///
    /// `question_count` is the number of questions the video has.
    pub fn record_response(
        &mut self,
        question_id: impl Into<String>,
        user_answer: impl Into<String>,
        is_correct: bool,
        question_count: usize,
    ) -> Score {
        let now = Utc::now();
        let response = ResponseRecord {
            question_id: question_id.into(),
            user_answer: user_answer.into(),
            is_correct,
            answered_at: now,
        };

        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }

        self.score = Score::from_verdicts(self.responses.iter().map(|r| r.is_correct));
        self.completed = question_count > 0 && self.responses.len() >= question_count;
        self.last_accessed = now;
        self.score
    }

    /// Number of distinct questions answered
    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    /// Latest response to a question, if any
    pub fn response_for(&self, question_id: &str) -> Option<&ResponseRecord> {
        self.responses.iter().find(|r| r.question_id == question_id)
    }
}
