//! Check constraint repair for the question type column.
//!
//! The flow is probe, repair, re-probe:
//! 1. Insert a throwaway row of the wanted type. If the table accepts it,
//!    delete it again and stop without touching the schema.
//! 2. Otherwise drop the check constraint and recreate it with the full
//!    type vocabulary, one remote SQL call per statement.
//! 3. Probe again to confirm.
//!
//! The two statements are not transactional. If the drop succeeds and the
//! recreate fails, the table is left with no type check at all.

use crate::QuestionStore;
use qbank_core::{PRIMARY_TABLE, ProbeQuestion, QuestionType};
use tracing::instrument;

/// The constraint being repaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSpec {
    /// Table holding the constraint
    pub table: String,
    /// Constraint name
    pub constraint: String,
    /// Column the constraint checks
    pub column: String,
    /// Values the recreated constraint allows
    pub allowed: Vec<QuestionType>,
}

impl Default for ConstraintSpec {
    fn default() -> Self {
        Self {
            table: PRIMARY_TABLE.to_string(),
            constraint: format!("{}_question_type_check", PRIMARY_TABLE),
            column: "question_type".to_string(),
            allowed: QuestionType::all(),
        }
    }
}

impl ConstraintSpec {
    /// Statement removing the current constraint, if any.
    ///
    /// ```
    /// use qbank_database::ConstraintSpec;
    ///
    /// assert_eq!(
    ///     ConstraintSpec::default().drop_sql(),
    ///     "ALTER TABLE new_questions DROP CONSTRAINT IF EXISTS new_questions_question_type_check;"
    /// );
    /// ```
    pub fn drop_sql(&self) -> String {
        format!(
            "ALTER TABLE {} DROP CONSTRAINT IF EXISTS {};",
            self.table, self.constraint
        )
    }

    /// Statement creating the replacement constraint.
    ///
    /// ```
    /// use qbank_database::ConstraintSpec;
    ///
    /// assert_eq!(
    ///     ConstraintSpec::default().add_sql(),
    ///     "ALTER TABLE new_questions ADD CONSTRAINT new_questions_question_type_check \
    ///      CHECK (question_type IN ('MCQ', 'MSQ', 'NAT', 'SUB'));"
    /// );
    /// ```
    pub fn add_sql(&self) -> String {
        format!(
            "ALTER TABLE {} ADD CONSTRAINT {} CHECK ({} IN ({}));",
            self.table,
            self.constraint,
            self.column,
            QuestionType::sql_value_list(&self.allowed)
        )
    }

    /// Both statements in execution order.
    pub fn statements(&self) -> [String; 2] {
        [self.drop_sql(), self.add_sql()]
    }
}

/// Result of one probe insert.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ProbeOutcome {
    /// Row inserted and cleaned up
    #[display("probe row accepted and removed")]
    Accepted,
    /// Insert returned no rows
    #[display("insert returned no rows")]
    NoRows,
    /// Insert or cleanup raised an error
    #[display("{}", _0)]
    Failed(String),
}

impl ProbeOutcome {
    /// Whether the table accepted the probe.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Result of executing the repair statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlOutcome {
    /// Every statement succeeded
    Applied,
    /// A statement failed; later statements were skipped
    Failed {
        /// The failing statement
        statement: String,
        /// Error text returned for it
        error: String,
        /// Statements that had already succeeded
        applied: usize,
    },
}

/// Final verdict of a repair run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RepairReport {
    /// The first probe passed, no SQL was executed
    #[display("Constraint is already working correctly!")]
    AlreadyValid,
    /// SQL applied and the second probe passed
    #[display("DATABASE CONSTRAINT SUCCESSFULLY FIXED!")]
    Repaired,
    /// SQL applied but the second probe still failed
    #[display("Constraint fix applied but test still fails: {}", _0)]
    StillFailing(ProbeOutcome),
    /// A repair statement failed
    #[display("Could not fix constraint via SQL: {}", error)]
    SqlFailed {
        /// The failing statement
        statement: String,
        /// Error text returned for it
        error: String,
        /// Statements that had already succeeded
        applied: usize,
    },
}

impl RepairReport {
    /// Whether the table accepts the probed type at the end of the run.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::AlreadyValid | Self::Repaired)
    }
}

/// Probe-and-repair runner over a [`QuestionStore`].
pub struct ConstraintRepair<'a, S: QuestionStore + ?Sized> {
    store: &'a S,
    spec: ConstraintSpec,
    topic_id: String,
}

impl<'a, S: QuestionStore + ?Sized> ConstraintRepair<'a, S> {
    /// Create a runner. `topic_id` must reference an existing topic so the
    /// probe row passes foreign key checks.
    pub fn new(store: &'a S, spec: ConstraintSpec, topic_id: impl Into<String>) -> Self {
        Self {
            store,
            spec,
            topic_id: topic_id.into(),
        }
    }

    /// The constraint being repaired.
    pub fn spec(&self) -> &ConstraintSpec {
        &self.spec
    }

    /// Insert a throwaway row of `question_type` and delete it on success.
    ///
    /// Never returns an error: every failure becomes [`ProbeOutcome::Failed`]
    /// carrying the raw error text. A failed cleanup also counts as a failed
    /// probe.
    #[instrument(skip(self), fields(table = %self.spec.table))]
    pub async fn probe(&self, question_type: QuestionType) -> ProbeOutcome {
        let probe = ProbeQuestion::new(&self.topic_id, question_type);
        let row = match probe.to_row() {
            Ok(row) => row,
            Err(e) => {
                println!("Test failed: {}", e.message);
                return ProbeOutcome::Failed(e.message);
            }
        };

        let rows = match self.store.insert_row(&self.spec.table, &row).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::debug!(error = %e, "Probe insert rejected");
                println!("Test failed: {}", e.kind);
                return ProbeOutcome::Failed(e.kind.to_string());
            }
        };

        if rows.is_empty() {
            println!("FAILED: Could not insert {} question", question_type);
            return ProbeOutcome::NoRows;
        }

        println!(
            "SUCCESS: {} question type constraint is fixed!",
            question_type
        );

        match self
            .store
            .delete_eq(&self.spec.table, "id", probe.id())
            .await
        {
            Ok(()) => {
                tracing::debug!(id = %probe.id(), "Probe row removed");
                ProbeOutcome::Accepted
            }
            Err(e) => {
                tracing::warn!(id = %probe.id(), error = %e, "Probe row left behind");
                println!("Test failed: {}", e.kind);
                ProbeOutcome::Failed(e.kind.to_string())
            }
        }
    }

    /// Execute the drop and recreate statements in order, stopping at the
    /// first failure. Nothing is rolled back.
    #[instrument(skip(self), fields(constraint = %self.spec.constraint))]
    pub async fn apply(&self) -> SqlOutcome {
        for (applied, sql) in self.spec.statements().into_iter().enumerate() {
            println!("Executing: {}", sql);
            match self.store.execute_sql(&sql).await {
                Ok(result) => println!("Success: {}", result),
                Err(e) => {
                    println!("Error executing SQL: {}", e.kind);
                    if applied > 0 {
                        tracing::error!(
                            table = %self.spec.table,
                            constraint = %self.spec.constraint,
                            "Constraint dropped but not recreated; column is unchecked"
                        );
                    }
                    return SqlOutcome::Failed {
                        statement: sql,
                        error: e.kind.to_string(),
                        applied,
                    };
                }
            }
        }
        tracing::info!("Constraint statements applied");
        SqlOutcome::Applied
    }

    /// Probe, repair if needed, and probe again.
    #[instrument(skip(self))]
    pub async fn run(&self, question_type: QuestionType) -> RepairReport {
        println!("Attempting to fix database constraint...");

        if self.probe(question_type).await.is_accepted() {
            return RepairReport::AlreadyValid;
        }

        println!("Constraint needs fixing. Attempting repair...");
        if let SqlOutcome::Failed {
            statement,
            error,
            applied,
        } = self.apply().await
        {
            return RepairReport::SqlFailed {
                statement,
                error,
                applied,
            };
        }

        println!("Constraint fix applied. Testing...");
        match self.probe(question_type).await {
            ProbeOutcome::Accepted => RepairReport::Repaired,
            other => RepairReport::StillFailing(other),
        }
    }
}
