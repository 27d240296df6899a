//! Supabase integration for qbank.
//!
//! This crate talks to the managed PostgreSQL database through its
//! PostgREST HTTP API and implements the check constraint repair flow.
//!
//! # Features
//!
//! - [`RestClient`] - row insert/delete and remote procedure calls
//! - [`QuestionStore`] - the seam the repair flow is written against
//! - [`ConstraintRepair`] - probe, drop/recreate, re-probe
//!
//! # Example
//!
//! ```rust,no_run
//! use qbank_core::{QuestionType, SAMPLE_TOPIC_ID};
//! use qbank_database::{ConstraintRepair, ConstraintSpec, DatabaseConfig, RestClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatabaseConfig::new("https://abc.supabase.co", "anon-key");
//! let client = RestClient::new(config)?;
//! let repair = ConstraintRepair::new(&client, ConstraintSpec::default(), SAMPLE_TOPIC_ID);
//! let report = repair.run(QuestionType::Sub).await;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod repair;
mod rest;
mod store;

pub use config::DatabaseConfig;
pub use repair::{ConstraintRepair, ConstraintSpec, ProbeOutcome, RepairReport, SqlOutcome};
pub use rest::RestClient;
pub use store::QuestionStore;

pub use qbank_error::{DatabaseError, DatabaseErrorKind};

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
