//! Application shell for InsightFlow.
//!
//! Fetches the weekly sheet once per run and hands the records to one of
//! the subcommands. An empty or unreachable sheet is terminal here; the
//! report generator itself never treats it as its problem.

mod compare;
mod report;
mod view;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use insightflow_core::{AppConfig, WeeklyMetricRecord};
use insightflow_sheets::SheetsClient;

#[derive(Debug, Parser)]
#[command(name = "insightflow")]
#[command(about = "Weekly social-media performance reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the narrative report for a week.
    Report {
        /// Week to report on (defaults to the most recent).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Directory to export the sanitized report into.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print one week's metrics.
    View {
        /// Week to show (defaults to the most recent).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print week-over-week changes between the given weeks, in order.
    Compare {
        /// At least two week dates, comma-separated.
        #[arg(long, value_delimiter = ',', required = true)]
        dates: Vec<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = insightflow_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let records = load_records(&config).await?;

    match cli.command {
        Commands::Report { date, output } => {
            report::run(&config, &records, date, output.as_deref()).await
        }
        Commands::View { date } => view::run(&records, date),
        Commands::Compare { dates } => compare::run(&records, &dates),
    }
}

/// Fetches all weekly records, treating an empty sheet as fatal to the run.
async fn load_records(config: &AppConfig) -> anyhow::Result<Vec<WeeklyMetricRecord>> {
    let client = SheetsClient::new(
        &config.sheets_api_key,
        &config.spreadsheet_id,
        config.sheets_timeout_secs,
    )?;
    let records = client.fetch_records(&config.worksheet).await?;
    if records.is_empty() {
        anyhow::bail!(
            "no weekly insights data found in worksheet '{}'",
            config.worksheet
        );
    }
    Ok(records)
}
