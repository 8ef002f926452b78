//! Bold-Field Dialect
//!
//! Responses made of blocks opened by a literal `**Question:**` delimiter:
//!
//! ```text
//! **Question:** What is the capital of France?
//! **Type:** multiple-choice
//! **Difficulty:** Easy
//! **Options:** `["Paris", "Rome", "Berlin", "Madrid"]`
//! **Answer:** Paris
//! **Explanation:** Paris has been the capital since 987.
//! ```
//!
//! The first line of each block is the question text, taken verbatim. Every
//! other line must carry at least two `**` markers to be read as a field.

use serde_json::Value;

use vidquiz_core::{Difficulty, ParserConfig, Question, QuestionDraft, QuestionType};

/// Literal that opens every question block.
pub const QUESTION_DELIMITER: &str = "**Question:**";

/// Parse a bold-field response.
///
/// Text before the first delimiter is discarded. All valid blocks are
/// returned; blocks without text or an answer are filtered out.
pub fn parse_bold_field_questions(text: &str, config: &ParserConfig) -> Vec<Question> {
    let mut questions = Vec::new();

    for (index, block) in text.split(QUESTION_DELIMITER).skip(1).enumerate() {
        let draft = parse_block(index + 1, block);
        let has_answer = draft.correct_answer.is_some();
        let option_count = draft.options.len();

        match draft.finish(&config.default_explanation) {
            Ok(question) => {
                tracing::debug!(
                    "Parsed question {}: type={}, options={}, hasAnswer={}",
                    question.id,
                    question.question_type,
                    option_count,
                    has_answer
                );
                questions.push(question);
            }
            Err(reason) => {
                tracing::debug!("Dropping question block {}: {}", index + 1, reason);
            }
        }
    }

    tracing::debug!("Total bold-field questions parsed: {}", questions.len());
    questions
}

fn parse_block(ordinal: usize, block: &str) -> QuestionDraft {
    let mut lines = block.trim().lines();
    let text = lines.next().unwrap_or_default().trim();
    let mut draft = QuestionDraft::new(ordinal.to_string(), text);
    let mut type_label: Option<String> = None;

    for line in lines {
        let Some((key, value)) = split_field(line) else {
            continue;
        };

        match key.as_str() {
            "type" => type_label = Some(value),
            "difficulty" => draft.difficulty = Some(Difficulty::from_initial(&value)),
            "options" => draft.options = parse_options(&value),
            "answer" | "correct answer" | "correctanswer" => draft.correct_answer = Some(value),
            "explanation" => draft.explanation = Some(value),
            _ => {}
        }
    }

    draft.question_type = Some(match type_label {
        Some(label) => QuestionType::from_label(&label),
        // Untyped blocks: lettered choices imply multiple choice
        None if !draft.options.is_empty() => QuestionType::Mcq,
        None => QuestionType::ShortAnswer,
    });

    draft
}

/// Split `**Key:** value` into a lowercased key and a trimmed value.
///
/// Returns `None` unless the line has at least two `**` segments.
fn split_field(line: &str) -> Option<(String, String)> {
    let mut parts = line.split("**");
    parts.next()?;
    let key = parts.next()?;
    let value = parts.next()?;

    let key = key.replacen(':', "", 1).trim().to_lowercase();
    let value = value.trim();
    let value = value.strip_prefix(':').unwrap_or(value).trim();

    Some((key, value.to_string()))
}

/// Parse an options payload permissively.
///
/// Backticks are stripped, then the value is read as a JSON array, a
/// comma-separated list, or a newline-separated list. A malformed JSON
/// array yields no options rather than failing the whole response.
fn parse_options(raw: &str) -> Vec<String> {
    let cleaned = raw.replace('`', "");
    let cleaned = cleaned.trim();

    if cleaned.starts_with('[') {
        match serde_json::from_str::<Vec<Value>>(cleaned) {
            Ok(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            Err(e) => {
                tracing::warn!("Failed to parse options {:?}: {}", cleaned, e);
                Vec::new()
            }
        }
    } else if cleaned.contains(',') {
        cleaned.split(',').map(|opt| opt.trim().to_string()).collect()
    } else if cleaned.contains('\n') {
        cleaned
            .lines()
            .map(str::trim)
            .filter(|opt| !opt.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    }
}
