//! Error types for the question generation API.

/// Error kinds for generation API calls.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ApiErrorKind {
    /// HTTP request failed: {0}
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Request timed out: {0}
    #[display("Request timed out: {}", _0)]
    Timeout(String),

    /// Failed to read response body: {0}
    #[display("Failed to read response body: {}", _0)]
    Body(String),

    /// Configuration error: {0}
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: {} at line {} in {}", kind, line, file)]
pub struct ApiError {
    /// The error kind
    pub kind: ApiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
