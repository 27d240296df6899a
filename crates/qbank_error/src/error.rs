//! Top-level error wrapper types.

use crate::{ApiError, ConfigError, DatabaseError, JsonError};

/// Every error a qbank crate can surface.
///
/// # Examples
///
/// ```
/// use qbank_error::{QbankError, JsonError};
///
/// let json_err = JsonError::new("trailing characters");
/// let err: QbankError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum QbankErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database REST API error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Question generation API error
    #[from(ApiError)]
    Api(ApiError),
}

/// qbank error with kind discrimination.
///
/// # Examples
///
/// ```
/// use qbank_error::{QbankResult, ConfigError};
///
/// fn might_fail() -> QbankResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("qbank Error: {}", _0)]
pub struct QbankError(Box<QbankErrorKind>);

impl QbankError {
    /// Create a new error from a kind.
    pub fn new(kind: QbankErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QbankErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to QbankErrorKind
impl<T> From<T> for QbankError
where
    T: Into<QbankErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for qbank operations.
pub type QbankResult<T> = std::result::Result<T, QbankError>;
