//! Question Parsing Integration Tests
//!
//! Verifies the single parsing entry point:
//! - Marker responses (`1.`, `TF1.`, `SA1.`)
//! - Bold-field responses (`**Question:**` blocks)
//! - Dropping of incomplete blocks and the marker-dialect cap

use vidquiz::{detect_dialect, parse, Dialect, Difficulty, QuestionType};

// ============================================================================
// Marker Dialect Tests
// ============================================================================

#[test]
fn test_one_question_of_each_marker_type() {
    let text = r#"1. [Medium] Which keyword declares an immutable binding in Rust?
a) var
b) let
c) const
d) static
Answer: let
Explanation: Bindings are immutable unless marked mut.
Difficulty: Easy

TF1. Rust has a garbage collector.
Answer: False
Explanation: Rust manages memory through ownership.
Difficulty: Medium

SA1. What does the borrow checker enforce?
Answer: Borrowing rules
Explanation: It checks references at compile time.
Difficulty: Hard"#;

    let questions = parse(text);

    assert_eq!(questions.len(), 3);
    let types: Vec<QuestionType> = questions.iter().map(|q| q.question_type).collect();
    assert_eq!(
        types,
        vec![
            QuestionType::Mcq,
            QuestionType::TrueFalse,
            QuestionType::ShortAnswer
        ]
    );
    assert_eq!(
        questions[0].text,
        "Which keyword declares an immutable binding in Rust?"
    );
    assert_eq!(questions[0].options, vec!["var", "let", "const", "static"]);
    assert_eq!(questions[0].difficulty, Difficulty::Easy);
    assert_eq!(questions[2].difficulty, Difficulty::Hard);
}

#[test]
fn test_mcq_option_capture_and_tag_stripping() {
    let questions = parse("1. [Hard] What is 2+2?\na) 3\nb) 4\nAnswer: 4");

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].options, vec!["3", "4"]);
    assert_eq!(questions[0].difficulty, Difficulty::Hard);
    assert_eq!(questions[0].text, "What is 2+2?");
}

#[test]
fn test_true_false_gets_canonical_options() {
    let questions = parse("TF1. Cargo is Rust's package manager.\nAnswer: True");

    assert_eq!(questions[0].options, vec!["True", "False"]);
    assert_eq!(questions[0].explanation, "No explanation provided.");
}

#[test]
fn test_marker_cap_of_ten() {
    let text: String = (1..=15)
        .map(|i| format!("{}. Question number {}?\nAnswer: {}\n\n", i, i, i))
        .collect();

    let questions = parse(&text);

    assert_eq!(questions.len(), 10);
    for (i, question) in questions.iter().enumerate() {
        assert_eq!(question.id, (i + 1).to_string());
    }
}

#[test]
fn test_marker_block_without_answer_is_dropped() {
    let text = "1. Kept?\nAnswer: yes\nSA1. Dropped?\nExplanation: no answer line\nTF1. Kept too.\nAnswer: True";

    let questions = parse(text);

    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| !q.correct_answer.is_empty()));
}

// ============================================================================
// Bold-Field Dialect Tests
// ============================================================================

#[test]
fn test_bold_field_answer_and_backtick_options() {
    let text = r#"Here you go:

**Question:** What is the capital of France?
**Type:** multiple-choice
**Difficulty:** Easy
**Options:** `["A","B","C","D"]`
**Answer:** Paris
**Explanation:** Paris is the capital."#;

    let questions = parse(text);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct_answer, "Paris");
    assert_eq!(questions[0].options, vec!["A", "B", "C", "D"]);
    assert_eq!(questions[0].question_type, QuestionType::Mcq);
    assert_eq!(questions[0].difficulty, Difficulty::Easy);
}

#[test]
fn test_bold_field_block_without_answer_is_dropped() {
    let text = "**Question:** One\n**Type:** short answer\n**Answer:** 1\n\
                **Question:** Two\n**Type:** short answer\n\
                **Question:** Three\n**Type:** true or false\n**Answer:** False";

    let questions = parse(text);

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].text, "One");
    assert_eq!(questions[1].question_type, QuestionType::TrueFalse);
}

#[test]
fn test_bold_field_emits_more_than_ten() {
    let text: String = (1..=14)
        .map(|i| format!("**Question:** Q{}\n**Type:** fill-in-the-blank\n**Answer:** A{}\n", i, i))
        .collect();

    assert_eq!(parse(&text).len(), 14);
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test]
fn test_dialect_detection() {
    assert_eq!(detect_dialect("**Question:** x"), Dialect::BoldField);
    assert_eq!(detect_dialect("1. x\nAnswer: y"), Dialect::Marker);
}

#[test]
fn test_unusable_responses_yield_empty() {
    assert!(parse("").is_empty());
    assert!(parse("The model refused to answer.").is_empty());
    assert!(parse("**Question:**").is_empty());
}

#[test]
fn test_questions_serialize_for_storage() {
    let questions = parse("SA1. Name the Rust build tool.\nAnswer: Cargo");

    let json = serde_json::to_value(&questions).unwrap();
    assert_eq!(json[0]["type"], "short_answer");
    assert_eq!(json[0]["correctAnswer"], "Cargo");
    assert_eq!(json[0]["options"].as_array().map(Vec::len), Some(0));
}
