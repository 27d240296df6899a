//! Disposable question record used to probe the question table.

use crate::QuestionType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A throwaway question row.
///
/// Inserted only to learn whether the table currently accepts a given
/// [`QuestionType`], then deleted by `id`.
///
/// # Examples
///
/// ```
/// use qbank_core::{ProbeQuestion, QuestionType, SAMPLE_TOPIC_ID};
///
/// let probe = ProbeQuestion::new(SAMPLE_TOPIC_ID, QuestionType::Sub);
/// assert_eq!(*probe.question_type(), QuestionType::Sub);
/// assert!(probe.options().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ProbeQuestion {
    id: String,
    topic_id: String,
    question_statement: String,
    question_type: QuestionType,
    options: Option<serde_json::Value>,
    answer: String,
    solution: String,
    difficulty_level: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProbeQuestion {
    /// Build a probe for `topic_id` with a fresh UUID and the current time.
    pub fn new(topic_id: impl Into<String>, question_type: QuestionType) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            topic_id: topic_id.into(),
            question_statement: format!(
                "Test {} question for constraint verification",
                question_type
            ),
            question_type,
            options: None,
            answer: format!("Test {} answer", question_type.description()),
            solution: "Test solution".to_string(),
            difficulty_level: "Medium".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The row as a JSON object, ready for a REST insert.
    pub fn to_row(&self) -> Result<serde_json::Value, qbank_error::JsonError> {
        serde_json::to_value(self).map_err(|e| qbank_error::JsonError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_serializes_null_options_and_code() {
        let probe = ProbeQuestion::new("topic-1", QuestionType::Nat);
        let row = probe.to_row().unwrap();

        assert_eq!(row["question_type"], "NAT");
        assert!(row["options"].is_null());
        assert_eq!(row["topic_id"], "topic-1");
        assert_eq!(row["id"], probe.id().as_str());
        assert_eq!(row["difficulty_level"], "Medium");
    }

    #[test]
    fn each_probe_gets_a_fresh_id() {
        let a = ProbeQuestion::new("t", QuestionType::Sub);
        let b = ProbeQuestion::new("t", QuestionType::Sub);
        assert_ne!(a.id(), b.id());
    }
}
