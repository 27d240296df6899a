//! Error types for the qbank toolkit.
//!
//! This crate provides the foundation error types used by every qbank crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use qbank_error::{QbankResult, ConfigError};
//!
//! fn load_key() -> QbankResult<String> {
//!     Err(ConfigError::new("SUPABASE_ANON_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod database;
mod error;
mod json;

pub use api::{ApiError, ApiErrorKind};
pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{QbankError, QbankErrorKind, QbankResult};
pub use json::JsonError;
