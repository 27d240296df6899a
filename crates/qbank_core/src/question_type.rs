//! Question format vocabulary.

use serde::{Deserialize, Serialize};

/// Format of a question as stored in the `question_type` column.
///
/// # Examples
///
/// ```
/// use qbank_core::QuestionType;
///
/// let parsed: QuestionType = "sub".parse().unwrap();
/// assert_eq!(parsed, QuestionType::Sub);
/// assert_eq!(parsed.to_string(), "SUB");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum QuestionType {
    /// Multiple choice, single correct option.
    Mcq,
    /// Multi-select, several correct options.
    Msq,
    /// Numerical answer.
    Nat,
    /// Subjective, free-form answer.
    Sub,
}

impl QuestionType {
    /// Every type in the vocabulary, in declaration order.
    pub fn all() -> Vec<QuestionType> {
        use strum::IntoEnumIterator;
        Self::iter().collect()
    }

    /// Human-readable name of the format.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Mcq => "multiple-choice",
            Self::Msq => "multi-select",
            Self::Nat => "numerical-answer",
            Self::Sub => "subjective",
        }
    }

    /// Render a list of types as a SQL `IN (...)` value list.
    ///
    /// ```
    /// use qbank_core::QuestionType;
    ///
    /// let list = QuestionType::sql_value_list(&[QuestionType::Nat, QuestionType::Sub]);
    /// assert_eq!(list, "'NAT', 'SUB'");
    /// ```
    pub fn sql_value_list(types: &[QuestionType]) -> String {
        types
            .iter()
            .map(|t| format!("'{}'", t.as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
