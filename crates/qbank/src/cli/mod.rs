//! Command-line interface module.

mod commands;
mod repair;
mod smoke;

pub use commands::{Cli, Commands};
pub use repair::fix_constraint;
pub use smoke::smoke_test;
