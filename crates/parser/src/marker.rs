//! Marker Dialect
//!
//! Responses where each question opens with an inline marker:
//!
//! ```text
//! 1. [Hard] What is 2+2?
//! a) 3
//! b) 4
//! Answer: 4
//! Explanation: Basic arithmetic.
//! TF1. The sun is a star.
//! Answer: True
//! SA1. Name the powerhouse of the cell.
//! Answer: Mitochondria
//! ```
//!
//! Lines after a marker are scanned until the next marker. Each line is
//! matched against the option, answer, explanation and difficulty patterns
//! in that order and the first match wins.

use std::sync::OnceLock;

use regex::Regex;

use vidquiz_core::{Difficulty, ParserConfig, Question, QuestionDraft, QuestionType};

/// Compiled line patterns, initialized once.
struct MarkerPatterns {
    true_false: Regex,
    short_answer: Regex,
    multiple_choice: Regex,
    option: Regex,
    answer: Regex,
    explanation: Regex,
    difficulty: Regex,
    bracket_tag: Regex,
}

fn patterns() -> &'static MarkerPatterns {
    static PATTERNS: OnceLock<MarkerPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| MarkerPatterns {
        true_false: Regex::new(r"^(TF\d+)\.\s*(.*)$").unwrap(),
        short_answer: Regex::new(r"^(SA\d+)\.\s*(.*)$").unwrap(),
        multiple_choice: Regex::new(r"^(\d+)\.\s*(.*)$").unwrap(),
        option: Regex::new(r"(?i)^([a-d])[.)]\s*(.*)$").unwrap(),
        answer: Regex::new(r"^(?i:Answer|Correct Answer|Correct):\s*(.*)$").unwrap(),
        explanation: Regex::new(r"^(?i:Explanation|Reason|Why):\s*(.*)$").unwrap(),
        difficulty: Regex::new(r"^(?i:Difficulty|Level):\s*(Easy|Medium|Hard)").unwrap(),
        bracket_tag: Regex::new(r"^\[([^\]]*)\]\s*(.*)$").unwrap(),
    })
}

/// Parse a marker-dialect response.
///
/// Returns at most `config.marker_question_limit` questions, the first valid
/// ones in document order. Blocks without text or without an answer line are
/// dropped.
pub fn parse_marker_questions(text: &str, config: &ParserConfig) -> Vec<Question> {
    let patterns = patterns();
    let mut questions = Vec::new();
    let mut current: Option<QuestionDraft> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(draft) = start_block(patterns, line) {
            if let Some(finished) = current.replace(draft) {
                push_finished(finished, config, &mut questions);
            }
            continue;
        }

        // Preamble before the first marker is ignored
        if let Some(draft) = current.as_mut() {
            apply_line(patterns, draft, line);
        }
    }

    if let Some(finished) = current.take() {
        push_finished(finished, config, &mut questions);
    }

    if questions.len() > config.marker_question_limit {
        tracing::debug!(
            "Discarding {} questions beyond the limit of {}",
            questions.len() - config.marker_question_limit,
            config.marker_question_limit
        );
        questions.truncate(config.marker_question_limit);
    }

    tracing::debug!("Total marker questions parsed: {}", questions.len());
    questions
}

/// Open a new draft if `line` is a question marker.
fn start_block(patterns: &MarkerPatterns, line: &str) -> Option<QuestionDraft> {
    let markers = [
        (&patterns.true_false, QuestionType::TrueFalse),
        (&patterns.short_answer, QuestionType::ShortAnswer),
        (&patterns.multiple_choice, QuestionType::Mcq),
    ];

    markers.iter().find_map(|(regex, question_type)| {
        regex.captures(line).map(|caps| {
            let (text, tagged_difficulty) = strip_bracket_tag(patterns, caps[2].trim());
            let mut draft = QuestionDraft::typed(&caps[1], text, *question_type);
            draft.difficulty = tagged_difficulty;
            draft
        })
    })
}

/// Remove a leading `[...]` tag, reporting it when it names a difficulty.
fn strip_bracket_tag<'a>(
    patterns: &MarkerPatterns,
    text: &'a str,
) -> (&'a str, Option<Difficulty>) {
    match patterns.bracket_tag.captures(text) {
        Some(caps) => {
            let difficulty = caps.get(1).and_then(|tag| Difficulty::from_exact(tag.as_str()));
            let rest = caps.get(2).map_or("", |m| m.as_str());
            (rest.trim(), difficulty)
        }
        None => (text, None),
    }
}

fn apply_line(patterns: &MarkerPatterns, draft: &mut QuestionDraft, line: &str) {
    if let Some(caps) = patterns.option.captures(line) {
        // Only multiple choice renders lettered options
        if draft.question_type == Some(QuestionType::Mcq) {
            draft.options.push(caps[2].trim().to_string());
        }
        return;
    }

    if let Some(value) = capture_value(&patterns.answer, line) {
        draft.correct_answer = Some(value);
        return;
    }

    if let Some(value) = capture_value(&patterns.explanation, line) {
        draft.explanation = Some(value);
        return;
    }

    if let Some(caps) = patterns.difficulty.captures(line) {
        draft.difficulty = Difficulty::from_exact(&caps[1]);
    }
}

/// First capture group, trimmed; `None` when the line does not match or the
/// value is blank.
fn capture_value(regex: &Regex, line: &str) -> Option<String> {
    let caps = regex.captures(line)?;
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn push_finished(draft: QuestionDraft, config: &ParserConfig, questions: &mut Vec<Question>) {
    let id = draft.id.clone();
    match draft.finish(&config.default_explanation) {
        Ok(question) => {
            tracing::debug!(
                "Parsed question {}: type={}, options={}",
                question.id,
                question.question_type,
                question.options.len()
            );
            questions.push(question);
        }
        Err(reason) => {
            tracing::debug!("Dropping question {}: {}", id, reason);
        }
    }
}
