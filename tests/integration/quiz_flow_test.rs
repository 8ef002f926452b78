//! Quiz Flow Integration Tests
//!
//! Simulates the full loop with a scripted completion client:
//! generate questions from a transcript, submit answers, read the score.

use std::sync::Arc;

use async_trait::async_trait;

use vidquiz::{
    AppError, AppResult, CompletionClient, Dialect, ProgressTracker, QuestionGenerator,
    QuestionType, QuizSettings,
};

/// Completion client that always returns the same text.
struct ScriptedClient(String);

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

const MARKER_RESPONSE: &str = r#"1. [Easy] Which organelle produces ATP?
a) Nucleus
b) Mitochondria
c) Ribosome
Answer: Mitochondria
Explanation: Mitochondria host cellular respiration.

TF1. Plant cells have cell walls.
Answer: True
Explanation: Cell walls are made of cellulose.

SA1. What molecule stores genetic information?
Answer: DNA
Difficulty: Medium"#;

#[tokio::test]
async fn test_generate_answer_and_score() {
    let generator = QuestionGenerator::new(Arc::new(ScriptedClient(MARKER_RESPONSE.to_string())));
    let tracker = ProgressTracker::new();

    let questions = generator
        .generate_questions("A lecture about cell biology.")
        .await
        .unwrap();
    assert_eq!(questions.len(), 3);
    let total = questions.len();

    let first = tracker
        .submit_answer("learner", "cells101", &questions[0], "b", total)
        .await
        .unwrap();
    assert!(first.is_correct);

    let second = tracker
        .submit_answer("learner", "cells101", &questions[1], "no", total)
        .await
        .unwrap();
    assert!(!second.is_correct);
    assert_eq!(second.explanation, "Cell walls are made of cellulose.");

    let third = tracker
        .submit_answer("learner", "cells101", &questions[2], "It is DNA", total)
        .await
        .unwrap();
    assert!(third.is_correct);
    assert!(third.completed);
    assert_eq!(third.score.correct, 2);
    assert_eq!(third.score.total, 3);
    assert_eq!(third.score.percentage, 67);

    assert!(tracker.reset("learner", "cells101").await);
    assert_eq!(tracker.score("learner", "cells101").await.total, 0);
}

#[tokio::test]
async fn test_bold_field_generation() {
    let response = "**Question:** Is Rust memory safe?\n**Type:** True/False\n**Answer:** True\n\
                    **Question:** Name Rust's package manager.\n**Type:** fill-in-the-blank\n**Answer:** Cargo";
    let settings = QuizSettings {
        prompt_dialect: Dialect::BoldField,
        ..Default::default()
    };
    let generator =
        QuestionGenerator::with_settings(Arc::new(ScriptedClient(response.to_string())), settings);

    let questions = generator.generate_questions("Rust intro").await.unwrap();

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question_type, QuestionType::TrueFalse);
    assert_eq!(questions[1].question_type, QuestionType::ShortAnswer);
}

#[tokio::test]
async fn test_unparseable_response_reports_generation_failure() {
    let generator = QuestionGenerator::new(Arc::new(ScriptedClient("Sorry!".to_string())));

    let err = generator.generate_questions("transcript").await.unwrap_err();

    assert!(matches!(err, AppError::GenerationFailed(_)));
    assert!(err.to_string().contains("No questions could be generated"));
}
