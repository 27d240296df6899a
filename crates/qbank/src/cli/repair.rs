//! Constraint repair command handler.

use super::commands::FixConstraintArgs;
use qbank::{ConstraintRepair, QbankResult, RepairReport, RestClient, Settings};
use tracing::instrument;

/// Probe the question table and repair its type check if needed.
///
/// Missing credentials are an error; every outcome of the repair itself is
/// reported on stdout and the command succeeds.
#[instrument(skip(settings))]
pub async fn fix_constraint(settings: &Settings, args: FixConstraintArgs) -> QbankResult<()> {
    let client = RestClient::new(settings.database_config()?)?;
    let topic_id = args
        .topic_id
        .unwrap_or_else(|| settings.probe.topic_id.clone());
    let probe_type = args.probe_type.unwrap_or(settings.probe.question_type);

    let repair = ConstraintRepair::new(&client, settings.constraint_spec(), topic_id);
    let report = repair.run(probe_type).await;

    for line in report_lines(&report, &repair.spec().table) {
        println!("{}", line);
    }

    tracing::info!(success = report.is_success(), "Constraint repair finished");
    Ok(())
}

/// Final lines printed for a repair report.
fn report_lines(report: &RepairReport, table: &str) -> Vec<String> {
    let mut lines = vec![report.to_string()];
    if let RepairReport::SqlFailed {
        statement, applied, ..
    } = report
    {
        lines.push(format!("   Failed statement: {}", statement));
        if *applied > 0 {
            lines.push(format!(
                "   WARNING: {} statement(s) already applied; {} may have no type check",
                applied, table
            ));
        }
        lines.push("Using workaround approach.".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_failure_is_reported_once() {
        let report = RepairReport::SqlFailed {
            statement: "ALTER TABLE new_questions ADD CONSTRAINT x CHECK (true);".to_string(),
            error: "permission denied".to_string(),
            applied: 1,
        };

        let lines = report_lines(&report, "new_questions");

        let mentions = lines
            .iter()
            .filter(|l| l.contains("Could not fix constraint via SQL"))
            .count();
        assert_eq!(mentions, 1);
        assert_eq!(lines[0], "Could not fix constraint via SQL: permission denied");
        assert!(lines[2].contains("new_questions may have no type check"));
        assert_eq!(lines.last().map(String::as_str), Some("Using workaround approach."));
    }

    #[test]
    fn success_is_a_single_line() {
        let lines = report_lines(&RepairReport::AlreadyValid, "new_questions");
        assert_eq!(lines, vec!["Constraint is already working correctly!"]);
    }
}
