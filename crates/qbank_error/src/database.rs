//! Database error types.

/// Database error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DatabaseErrorKind {
    /// The request never produced a response
    #[display("Database request failed: {}", _0)]
    Request(String),
    /// The REST API answered with a non-success status
    #[display("Database returned {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to deserialize database response: {}", _0)]
    Deserialization(String),
    /// Missing or invalid connection settings
    #[display("Database configuration error: {}", _0)]
    Configuration(String),
}

/// Database error with source location tracking.
///
/// # Examples
///
/// ```
/// use qbank_error::{DatabaseError, DatabaseErrorKind};
///
/// let err = DatabaseError::new(DatabaseErrorKind::Api {
///     status: 400,
///     message: "violates check constraint".to_string(),
/// });
/// assert!(format!("{}", err).contains("check constraint"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Database Error: {} at line {} in {}", kind, line, file)]
pub struct DatabaseError {
    /// The kind of error that occurred
    pub kind: DatabaseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DatabaseError {
    /// Create a new DatabaseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DatabaseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
