//! Answer Grading Integration Tests
//!
//! Verifies the correctness verdict for free-text answers, including the
//! option-letter extension.

use vidquiz::{is_correct, is_correct_with_options, normalize_answer};

#[test]
fn test_case_insensitive_exact_match() {
    assert!(is_correct(Some("Paris"), Some("paris")));
}

#[test]
fn test_stop_words_are_ignored() {
    assert!(is_correct(Some("The Paris"), Some("Paris")));
    assert_eq!(normalize_answer("The Paris"), "paris");
}

#[test]
fn test_verbose_answer_contains_correct_answer() {
    assert!(is_correct(
        Some("I think it is mitochondria"),
        Some("mitochondria")
    ));
}

#[test]
fn test_boolean_equivalence() {
    assert!(is_correct(Some("yes"), Some("True")));
    assert!(is_correct(Some("wrong"), Some("False")));
    assert!(!is_correct(Some("right"), Some("False")));
}

#[test]
fn test_empty_and_null_inputs() {
    assert!(!is_correct(Some(""), Some("Paris")));
    assert!(!is_correct(None, None));
    assert!(!is_correct(Some("Paris"), Some("")));
}

#[test]
fn test_wrong_answer() {
    assert!(!is_correct(Some("Berlin"), Some("Paris")));
}

#[test]
fn test_option_letter_needs_options() {
    let options: Vec<String> = vec!["Lisbon".into(), "Madrid".into()];

    assert!(!is_correct(Some("b"), Some("Madrid")));
    assert!(is_correct_with_options(Some("b"), Some("Madrid"), &options));
    assert!(is_correct_with_options(Some("B)"), Some("Madrid"), &options));
    assert!(!is_correct_with_options(Some("c"), Some("Madrid"), &options));
}

#[test]
fn test_lettered_canonical_answers() {
    // Marker-dialect answers often repeat the option letter
    assert!(is_correct(Some("b"), Some("b) Rome")));
    assert!(is_correct(Some("4"), Some("B) 4")));
    assert!(!is_correct(Some("c) Berlin"), Some("b) Berlin")));
}
