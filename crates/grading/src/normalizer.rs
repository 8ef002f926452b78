//! Answer Correctness Normalizer
//!
//! Grading is deliberately generous: after normalization, an answer that
//! contains the canonical answer (or is contained by it) counts as correct.
//! Short canonical answers can therefore match unrelated text that happens
//! to include them. Stored score history depends on this behavior.

use std::sync::OnceLock;

use regex::Regex;

const TRUE_VARIANTS: [&str; 5] = ["true", "correct", "yes", "right", "t"];
const FALSE_VARIANTS: [&str; 5] = ["false", "incorrect", "no", "wrong", "f"];

fn stop_words() -> &'static Regex {
    static STOP_WORDS: OnceLock<Regex> = OnceLock::new();
    STOP_WORDS.get_or_init(|| Regex::new(r"\b(?:a|an|the)\b").unwrap())
}

fn option_prefix() -> &'static Regex {
    static OPTION_PREFIX: OnceLock<Regex> = OnceLock::new();
    OPTION_PREFIX.get_or_init(|| Regex::new(r"^[a-z]\)\s*").unwrap())
}

/// Normalize an answer for comparison.
///
/// Lowercases, keeps only ASCII letters, digits and whitespace, removes the
/// standalone words `a`, `an` and `the`, then trims. Interior whitespace is
/// left as is, so `"paris the capital"` becomes `"paris  capital"`.
pub fn normalize_answer(answer: &str) -> String {
    let kept: String = answer
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    stop_words().replace_all(&kept, "").trim().to_string()
}

/// Normalized answer with a leading option prefix such as `b) ` removed.
fn cleaned_answer(normalized: &str) -> String {
    option_prefix().replace(normalized, "").into_owned()
}

fn same_boolean_class(user: &str, correct: &str) -> bool {
    (TRUE_VARIANTS.contains(&user) && TRUE_VARIANTS.contains(&correct))
        || (FALSE_VARIANTS.contains(&user) && FALSE_VARIANTS.contains(&correct))
}

/// Decide whether `user_answer` matches `correct_answer`.
///
/// Checks, in order: exact match after normalization, exact match once an
/// option prefix is removed, containment in either direction, and
/// membership of both answers in the same true/false class.
///
/// The prefix check runs on the normalized strings, where `)` is already
/// gone. A lettered answer like `"b) Rome"` is therefore compared as
/// `"b rome"` and matches `"b"` or `"rome"` only through containment.
///
/// A lone option letter (`"b"`) compared with a longer answer is not
/// resolved to option text here because the options are unknown; it only
/// matches through the checks above. Use [`is_correct_with_options`] when the
/// options are available.
pub fn is_correct(user_answer: Option<&str>, correct_answer: Option<&str>) -> bool {
    let (Some(user), Some(correct)) = (user_answer, correct_answer) else {
        return false;
    };
    if user.is_empty() || correct.is_empty() {
        return false;
    }

    let normalized_user = normalize_answer(user);
    let normalized_correct = normalize_answer(correct);
    if normalized_user.is_empty() || normalized_correct.is_empty() {
        return false;
    }

    if normalized_user == normalized_correct {
        return true;
    }

    let clean_user = cleaned_answer(&normalized_user);
    let clean_correct = cleaned_answer(&normalized_correct);
    if clean_user == clean_correct {
        return true;
    }

    if clean_user.contains(&clean_correct) || clean_correct.contains(&clean_user) {
        return true;
    }

    same_boolean_class(&clean_user, &clean_correct)
}

/// Map a single option letter (`"b"`, `"B)"`, `"c."`) to its option text.
///
/// Only letters `a` to `d` are recognized, and only when `options` has an
/// entry at that position.
pub fn resolve_option_letter<'a>(answer: &'a str, options: &'a [String]) -> Option<&'a str> {
    let trimmed = answer.trim();
    let letter = trimmed
        .strip_suffix(')')
        .or_else(|| trimmed.strip_suffix('.'))
        .unwrap_or(trimmed);

    let mut chars = letter.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let index = match c.to_ascii_lowercase() {
        'a' => 0,
        'b' => 1,
        'c' => 2,
        'd' => 3,
        _ => return None,
    };
    options.get(index).map(String::as_str)
}

/// [`is_correct`] with option letters resolved against `options` first.
///
/// With an empty `options` slice this is exactly [`is_correct`].
pub fn is_correct_with_options(
    user_answer: Option<&str>,
    correct_answer: Option<&str>,
    options: &[String],
) -> bool {
    let user = user_answer.map(|a| resolve_option_letter(a, options).unwrap_or(a));
    let correct = correct_answer.map(|a| resolve_option_letter(a, options).unwrap_or(a));
    is_correct(user, correct)
}
