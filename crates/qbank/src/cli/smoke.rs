//! Smoke test command handler.

use super::commands::SmokeTestArgs;
use chrono::Local;
use qbank::{GenerateQuestionRequest, GenerationClient, QbankResult, Settings, SmokeTest};
use std::time::Duration;
use tracing::instrument;

/// Send one generation request and print the analysis and summary.
#[instrument(skip(settings))]
pub async fn smoke_test(settings: &Settings, args: SmokeTestArgs) -> QbankResult<()> {
    let mut config = settings.api_config();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }

    let question_type = args.question_type.unwrap_or(settings.probe.question_type);
    let topic_id = args
        .topic_id
        .unwrap_or_else(|| settings.probe.topic_id.clone());
    let mut request = GenerateQuestionRequest::new(topic_id, question_type);
    if let Some(part_id) = args.part_id {
        request = request.with_part_id(part_id);
    }
    if let Some(slot_id) = args.slot_id {
        request = request.with_slot_id(slot_id);
    }

    let started = Local::now();
    println!("Starting Focused {} Constraint Workaround Test", question_type);
    println!("Test started at: {}", started);
    println!();

    let client = GenerationClient::new(config)?;
    let outcome = SmokeTest::new(&client, request).run().await;

    qbank::print_summary(&outcome, started, Local::now());
    tracing::info!(passed = outcome.passed, "Smoke test finished");
    Ok(())
}
