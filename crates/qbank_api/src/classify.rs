//! Classification of generation outcomes by response content.

use qbank_core::FALLBACK_TABLE;

/// A known database problem recognized in an error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Diagnosis {
    /// The fallback table has no `difficulty_level` column
    DifficultyLevelColumn,
    /// The primary table's type check still rejects the type
    QuestionTypeCheck,
    /// A foreign key on the fallback table failed
    ForeignKey,
    /// The fallback table's `question_id` foreign key specifically
    QuestionIdForeignKey,
}

impl Diagnosis {
    /// Lowercase substring of the detail that triggers this diagnosis.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::DifficultyLevelColumn => "difficulty_level",
            Self::QuestionTypeCheck => "question_type_check",
            Self::ForeignKey => "foreign key constraint",
            Self::QuestionIdForeignKey => "question_id_fkey",
        }
    }

    /// Canned explanation printed for this diagnosis.
    pub fn explanation(&self) -> &'static [&'static str] {
        match self {
            Self::DifficultyLevelColumn => &[
                "SCHEMA ISSUE: questions_topic_wise table schema problem",
                "Missing difficulty_level column in questions_topic_wise table",
                "SOLUTION: Remove difficulty_level from the question data when saving to questions_topic_wise",
            ],
            Self::QuestionTypeCheck => &[
                "TYPE CONSTRAINT: new_questions table still rejects the question type",
                "Database constraint 'new_questions_question_type_check' blocks it",
                "SOLUTION: Update database constraint to allow the type (qbank fix-constraint)",
            ],
            Self::ForeignKey => &[
                "FOREIGN KEY ISSUE: questions_topic_wise table foreign key problem",
                "question_id field references non-existent record in questions table",
                "SOLUTION: Use different field mapping or create proper foreign key reference",
            ],
            Self::QuestionIdForeignKey => &[
                "SPECIFIC ISSUE: questions_topic_wise_question_id_fkey constraint",
                "The question_id field in questions_topic_wise must reference existing questions table",
                "Current workaround uses question_id field but doesn't create questions table entry",
                "SOLUTION: Either create questions table entry first, or use different field mapping",
            ],
        }
    }
}

/// Why a generation request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureClass {
    /// The detail mentions a constraint; carries every specific match, which may be none
    Constraint(Vec<Diagnosis>),
    /// The upstream LLM quota is exhausted; unrelated to the database
    Quota,
    /// Anything else
    Other,
}

/// Classify a failed response by status and error detail.
///
/// Matching is case-insensitive. A constraint mention takes precedence over
/// a quota mention; a 429 status counts as quota when no constraint is named.
///
/// # Examples
///
/// ```
/// use qbank_api::{classify_failure, Diagnosis, FailureClass};
///
/// let class = classify_failure(500, "violates check constraint \"new_questions_question_type_check\"");
/// assert_eq!(class, FailureClass::Constraint(vec![Diagnosis::QuestionTypeCheck]));
///
/// assert_eq!(classify_failure(500, "Gemini Quota exceeded"), FailureClass::Quota);
/// ```
pub fn classify_failure(status: u16, detail: &str) -> FailureClass {
    use strum::IntoEnumIterator;

    let detail = detail.to_lowercase();
    if detail.contains("constraint") {
        let matched = Diagnosis::iter()
            .filter(|d| detail.contains(d.marker()))
            .collect();
        FailureClass::Constraint(matched)
    } else if detail.contains("quota") || status == 429 {
        FailureClass::Quota
    } else {
        FailureClass::Other
    }
}

/// Where a successfully generated question was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAssessment {
    /// Saved to the fallback table: the workaround path worked
    WorkaroundSuccessful,
    /// Saved somewhere else; not a failure, but not what the workaround does
    UnexpectedTable(String),
}

impl SaveAssessment {
    /// Assess the `_saved_to_table` marker.
    pub fn from_table(table: &str) -> Self {
        if table == FALLBACK_TABLE {
            Self::WorkaroundSuccessful
        } else {
            Self::UnexpectedTable(table.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_detail_collects_every_marker() {
        let detail = "insert or update on table \"questions_topic_wise\" violates \
                      Foreign Key Constraint \"questions_topic_wise_question_id_fkey\"";
        assert_eq!(
            classify_failure(500, detail),
            FailureClass::Constraint(vec![Diagnosis::ForeignKey, Diagnosis::QuestionIdForeignKey])
        );
    }

    #[test]
    fn constraint_without_known_marker_has_no_diagnoses() {
        assert_eq!(
            classify_failure(500, "unique constraint violated"),
            FailureClass::Constraint(vec![])
        );
    }

    #[test]
    fn constraint_wins_over_quota() {
        let class = classify_failure(429, "quota ok but difficulty_level constraint failed");
        assert_eq!(
            class,
            FailureClass::Constraint(vec![Diagnosis::DifficultyLevelColumn])
        );
    }

    #[test]
    fn status_429_is_quota_without_mention() {
        assert_eq!(classify_failure(429, "Too Many Requests"), FailureClass::Quota);
    }

    #[test]
    fn unrelated_detail_is_other() {
        assert_eq!(classify_failure(500, "Topic not found"), FailureClass::Other);
    }

    #[test]
    fn only_fallback_table_is_the_workaround() {
        assert_eq!(
            SaveAssessment::from_table("questions_topic_wise"),
            SaveAssessment::WorkaroundSuccessful
        );
        assert_eq!(
            SaveAssessment::from_table("new_questions"),
            SaveAssessment::UnexpectedTable("new_questions".to_string())
        );
    }
}
