//! Core domain types and configuration for InsightFlow.
//!
//! Holds the typed weekly metric record, the environment-driven application
//! configuration, and the pure metric-analysis helpers shared by the report
//! generator and the CLI.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod metrics;
pub mod record;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use metrics::{by_date, engagement_rate, latest, week_over_week, WeekComparison};
pub use record::{display_or_placeholder, WeeklyMetricRecord, MISSING_FIELD_PLACEHOLDER};

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value could not be parsed.
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
