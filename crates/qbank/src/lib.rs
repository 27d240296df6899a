//! qbank - operational tools for the question bank backend.
//!
//! Two independent operations, each a subcommand of the `qbank` binary:
//!
//! - **fix-constraint**: probe the `new_questions` table with a throwaway row
//!   and, if the question type check rejects it, drop and recreate the check
//!   constraint through the database's SQL remote procedure, then probe again.
//! - **smoke-test**: send one request to the question generation endpoint and
//!   print a diagnosis of the response.
//!
//! # Architecture
//!
//! - `qbank_error` - Error types
//! - `qbank_core` - Question records and API payloads
//! - `qbank_database` - Supabase REST client and constraint repair
//! - `qbank_api` - Generation API client and smoke test
//!
//! This crate re-exports the pieces the binary wires together and owns the
//! configuration layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{ApiSettings, DatabaseSettings, ProbeSettings, Settings};

pub use qbank_api::{
    ApiConfig, FailureClass, GenerationClient, SaveAssessment, SmokeOutcome, SmokeTest,
    SmokeVerdict, print_summary,
};
pub use qbank_core::{
    FALLBACK_TABLE, GenerateQuestionRequest, PRIMARY_TABLE, QuestionType, SAMPLE_TOPIC_ID,
};
pub use qbank_database::{
    ConstraintRepair, ConstraintSpec, DatabaseConfig, RepairReport, RestClient,
};
pub use qbank_error::{ConfigError, QbankError, QbankErrorKind, QbankResult};
