//! Prompt Builders
//!
//! Prompts that ask a model for transcript-based questions in one of the two
//! parseable dialects, and for a bullet-point summary. Each prompt embeds a
//! truncated transcript so the request stays within the model's input budget.

use crate::dispatch::Dialect;

/// Return at most `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Build the question prompt for the given dialect.
pub fn build_question_prompt(dialect: Dialect, transcript: &str, max_chars: usize) -> String {
    match dialect {
        Dialect::Marker => build_marker_question_prompt(transcript, max_chars),
        Dialect::BoldField => build_bold_field_question_prompt(transcript, max_chars),
    }
}

/// Prompt for marker-dialect questions (`1.`, `TF1.`, `SA1.`).
pub fn build_marker_question_prompt(transcript: &str, max_chars: usize) -> String {
    format!(
        r#"Generate 5-10 diverse, content-based, and technical questions about this content:
{transcript}

Guidelines:
- Do NOT include any questions about the speaker, their intentions, or their opinions.
- Only ask questions about the technical content, facts, concepts, or processes described.
- Avoid questions that reference "the speaker", "the listener", or any personal perspective.
- Use these formats:
  1. Multiple choice (format: 1. [Difficulty] Question, followed by options a) to d))
  2. True/False (format: TF1. Statement)
  3. Short answer (format: SA1. Question)

- For each question provide:
  - Correct answer (Answer:)
  - Explanation (Explanation:)
  - Difficulty (Difficulty: Easy/Medium/Hard)"#,
        transcript = truncate_chars(transcript, max_chars),
    )
}

/// Prompt for bold-field questions (`**Question:**` blocks).
pub fn build_bold_field_question_prompt(transcript: &str, max_chars: usize) -> String {
    format!(
        r#"Generate 5-10 diverse, content-based, and technical questions about this content:
{transcript}

Guidelines:
- Only ask questions about the technical content, facts, concepts, or processes described.
- Mix multiple-choice, true/false, and fill-in-the-blank questions.
- Write every question as a block in this EXACT format, one field per line:

**Question:** <question text on a single line>
**Type:** <multiple-choice | true/false | fill-in-the-blank>
**Difficulty:** <Easy | Medium | Hard>
**Options:** <JSON array of strings, only for multiple-choice>
**Answer:** <the correct answer>
**Explanation:** <one sentence>"#,
        transcript = truncate_chars(transcript, max_chars),
    )
}

/// Prompt for a summary of exactly `bullet_count` `*`-prefixed points.
pub fn build_summary_prompt(transcript: &str, max_chars: usize, bullet_count: usize) -> String {
    format!(
        r#"Summarize this YouTube video transcript in exactly {bullet_count} bullet points:
{transcript}

Guidelines:
- Start each point with '*'
- Keep each point concise (1-2 sentences)
- The summary should give the reader a rough idea of the video
- Be precise and maintain the original meaning
- Use clear, simple language"#,
        bullet_count = bullet_count,
        transcript = truncate_chars(transcript, max_chars),
    )
}
