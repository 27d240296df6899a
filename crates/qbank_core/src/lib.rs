//! Core data types for the qbank toolkit.
//!
//! This crate defines the records exchanged with the question bank backend:
//! - [`QuestionType`] - the fixed vocabulary of question formats
//! - [`ProbeQuestion`] - a disposable row used to test write permissions
//! - [`GenerateQuestionRequest`] / [`GeneratedQuestion`] - the generation API payloads
//! - [`ErrorDetail`] - the `detail` string of a failed API call

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generation;
mod probe;
mod question_type;

pub use generation::{ErrorDetail, GenerateQuestionRequest, GeneratedQuestion};
pub use probe::ProbeQuestion;
pub use question_type::QuestionType;

/// Primary storage table for generated questions.
pub const PRIMARY_TABLE: &str = "new_questions";

/// Fallback table used when the primary table rejects a write.
pub const FALLBACK_TABLE: &str = "questions_topic_wise";

/// Topic known to exist in the backend, used by probes and smoke tests.
pub const SAMPLE_TOPIC_ID: &str = "7c583ed3-64bf-4fa0-bf20-058ac4b40737";
