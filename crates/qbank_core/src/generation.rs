//! Payloads of the question generation endpoint.

use crate::{PRIMARY_TABLE, QuestionType};
use qbank_error::JsonError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Body of `POST /api/generate-question`.
///
/// Absent `part_id`/`slot_id` are sent as explicit `null`s.
///
/// # Examples
///
/// ```
/// use qbank_core::{GenerateQuestionRequest, QuestionType};
///
/// let request = GenerateQuestionRequest::new("topic-1", QuestionType::Sub);
/// let json = serde_json::to_value(&request).unwrap();
/// assert!(json["part_id"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateQuestionRequest {
    /// Topic the question is generated for
    pub topic_id: String,
    /// Requested question format
    pub question_type: QuestionType,
    /// Optional exam part
    pub part_id: Option<String>,
    /// Optional slot within the part
    pub slot_id: Option<String>,
}

impl GenerateQuestionRequest {
    /// Create a request with no part or slot.
    pub fn new(topic_id: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            topic_id: topic_id.into(),
            question_type,
            part_id: None,
            slot_id: None,
        }
    }

    /// Set the part id.
    pub fn with_part_id(mut self, part_id: impl Into<String>) -> Self {
        self.part_id = Some(part_id.into());
        self
    }

    /// Set the slot id.
    pub fn with_slot_id(mut self, slot_id: impl Into<String>) -> Self {
        self.slot_id = Some(slot_id.into());
        self
    }
}

/// A successful generation response.
///
/// The document is kept opaque; only a handful of top-level fields are read.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuestion(Map<String, Value>);

impl GeneratedQuestion {
    /// Parse a response body. The body must be a JSON object.
    pub fn from_body(body: &str) -> Result<Self, JsonError> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(JsonError::new(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(JsonError::new(e.to_string())),
        }
    }

    /// A top-level field rendered as text. Strings are returned verbatim,
    /// `null` and missing fields yield `None`.
    pub fn field(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Table the backend reports having saved the question to.
    ///
    /// ```
    /// use qbank_core::GeneratedQuestion;
    ///
    /// let q = GeneratedQuestion::from_body(r#"{"id": "1"}"#).unwrap();
    /// assert_eq!(q.saved_to_table(), "new_questions");
    /// ```
    pub fn saved_to_table(&self) -> String {
        self.field("_saved_to_table")
            .unwrap_or_else(|| PRIMARY_TABLE.to_string())
    }
}

/// The `detail` of an error response.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub struct ErrorDetail(String);

impl ErrorDetail {
    /// Returned when the body has no `detail` field.
    pub const MISSING: &'static str = "No detail provided";

    /// Extract `detail` from an error body. Non-string details (validation
    /// error lists, objects) are rendered as compact JSON. The body must be
    /// a JSON object.
    pub fn from_body(body: &str) -> Result<Self, JsonError> {
        let map = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(JsonError::new(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )));
            }
            Err(e) => return Err(JsonError::new(e.to_string())),
        };
        let detail = match map.get("detail") {
            None | Some(Value::Null) => Self::MISSING.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        Ok(Self(detail))
    }

    /// The detail text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
