//! Storage seam used by the repair flow.

use crate::DatabaseResult;
use serde_json::Value;

/// Row-level and raw-SQL access to the question tables.
///
/// [`RestClient`](crate::RestClient) implements this against the live
/// database; tests provide in-memory implementations.
#[async_trait::async_trait]
pub trait QuestionStore: Send + Sync {
    /// Execute one raw SQL statement through the SQL remote procedure.
    async fn execute_sql(&self, sql: &str) -> DatabaseResult<Value>;

    /// Insert one row, returning the rows the database reports as written.
    async fn insert_row(&self, table: &str, row: &Value) -> DatabaseResult<Vec<Value>>;

    /// Delete every row of `table` whose `column` equals `value`.
    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> DatabaseResult<()>;
}
