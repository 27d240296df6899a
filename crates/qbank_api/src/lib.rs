//! Question generation API client and smoke test for qbank.
//!
//! The smoke test sends one generation request and explains the outcome:
//! which table the question landed in on success, or which known database
//! problem the error detail points at on failure. It never retries and
//! never remediates.
//!
//! # Example
//!
//! ```rust,no_run
//! use qbank_api::{ApiConfig, GenerationClient, SmokeTest};
//! use qbank_core::{GenerateQuestionRequest, QuestionType, SAMPLE_TOPIC_ID};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GenerationClient::new(ApiConfig::new("http://localhost:8001"))?;
//! let request = GenerateQuestionRequest::new(SAMPLE_TOPIC_ID, QuestionType::Sub);
//! let outcome = SmokeTest::new(&client, request).run().await;
//! println!("{}", outcome.message);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod client;
mod config;
mod smoke;

pub use classify::{Diagnosis, FailureClass, SaveAssessment, classify_failure};
pub use client::{ApiResponse, GenerationClient};
pub use config::ApiConfig;
pub use smoke::{SmokeOutcome, SmokeTest, SmokeVerdict, print_summary};

pub use qbank_error::{ApiError, ApiErrorKind};
