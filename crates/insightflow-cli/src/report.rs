//! The `report` subcommand: generate and optionally export one week's
//! narrative report.

use std::path::Path;

use chrono::NaiveDate;

use insightflow_core::{AppConfig, WeeklyMetricRecord};
use insightflow_report::{write_report, ReportConfig, ReportGenerator, ReportOutcome};

pub(crate) async fn run(
    config: &AppConfig,
    records: &[WeeklyMetricRecord],
    date: Option<NaiveDate>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let record = select_record(records, date)?;

    let generator = ReportGenerator::new(&ReportConfig::from_app_config(config))?;
    let outcome = generator.generate(record).await;

    match &outcome {
        ReportOutcome::Generated(_) => {
            tracing::info!(date = %record.date, "report generated by completion service");
        }
        ReportOutcome::Fallback(_) => {
            tracing::warn!(date = %record.date, "report built from deterministic template");
        }
        ReportOutcome::Failed(_) => {
            tracing::error!(date = %record.date, "report generation failed entirely");
        }
    }

    println!("{}", outcome.text());

    if let Some(dir) = output {
        let path = write_report(dir, record.date, outcome.text())?;
        tracing::info!(path = %path.display(), "report exported");
    }

    Ok(())
}

/// Picks the requested week, or the most recent one when no date is given.
fn select_record(
    records: &[WeeklyMetricRecord],
    date: Option<NaiveDate>,
) -> anyhow::Result<&WeeklyMetricRecord> {
    match date {
        Some(d) => insightflow_core::by_date(records, d)
            .ok_or_else(|| anyhow::anyhow!("no data found for week {d}")),
        None => insightflow_core::latest(records)
            .ok_or_else(|| anyhow::anyhow!("no weekly records available")),
    }
}
