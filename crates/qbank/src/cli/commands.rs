//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use qbank::QuestionType;
use std::path::PathBuf;

/// qbank - operational tools for the question bank backend
#[derive(Parser, Debug)]
#[command(name = "qbank")]
#[command(about = "Repair the question type constraint and smoke test question generation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Additional configuration file (highest file precedence)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the question table and repair its type check constraint if needed
    FixConstraint(FixConstraintArgs),

    /// Send one generation request and diagnose the response
    SmokeTest(SmokeTestArgs),
}

/// Arguments for `fix-constraint`
#[derive(Args, Debug)]
pub struct FixConstraintArgs {
    /// Question type the probe row uses
    #[arg(long)]
    pub probe_type: Option<QuestionType>,

    /// Existing topic referenced by the probe row
    #[arg(long)]
    pub topic_id: Option<String>,
}

/// Arguments for `smoke-test`
#[derive(Args, Debug)]
pub struct SmokeTestArgs {
    /// Base URL of the generation service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Topic to generate a question for
    #[arg(long)]
    pub topic_id: Option<String>,

    /// Question type to request
    #[arg(long)]
    pub question_type: Option<QuestionType>,

    /// Exam part id
    #[arg(long)]
    pub part_id: Option<String>,

    /// Slot id within the part
    #[arg(long)]
    pub slot_id: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
