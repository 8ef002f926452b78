//! Integration Tests Module
//!
//! End-to-end coverage of the public VidQuiz API: question parsing across
//! both response dialects, answer grading, and the generate/answer/score flow.

// Question parsing tests (marker and bold-field dialects)
mod question_parsing_test;

// Answer grading tests
mod grading_test;

// Generation, answering and progress flow tests
mod quiz_flow_test;

// Settings persistence tests
mod settings_test;
