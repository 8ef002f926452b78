//! Summary Bullet Extraction
//!
//! Summaries are requested as `*`-prefixed bullet points; any other line the
//! model adds (headings, sign-offs) is ignored.

/// Extract bullet points from a summary response.
pub fn parse_summary_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('*'))
        .map(str::trim)
        .filter(|bullet| !bullet.is_empty())
        .map(str::to_string)
        .collect()
}
