//! qbank CLI binary.
//!
//! - Repair the question type check constraint
//! - Smoke test the question generation endpoint

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, fix_constraint, smoke_test};

    // Credentials usually live in a .env next to the backend
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = qbank::Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::FixConstraint(args) => fix_constraint(&settings, args).await?,
        Commands::SmokeTest(args) => smoke_test(&settings, args).await?,
    }

    Ok(())
}
