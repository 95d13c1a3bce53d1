//! Report-generation orchestration.
//!
//! One record in, one [`ReportOutcome`] out. The completion service is
//! tried first (with retries); on exhaustion the deterministic template
//! takes over; only a structurally empty record degrades further, to a
//! short error string. Nothing here returns `Err` to the caller and the
//! input record is never mutated.

use insightflow_core::WeeklyMetricRecord;

use crate::client::LlmClient;
use crate::error::ReportError;
use crate::fallback::fallback_report;
use crate::prompt::build_prompt;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::sanitize::sanitize_text;
use crate::types::{ReportConfig, ReportOutcome};

/// Generates weekly narrative reports, one record at a time.
pub struct ReportGenerator {
    client: LlmClient,
    policy: RetryPolicy,
}

impl ReportGenerator {
    /// Creates a generator from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error only for an unusable configuration (bad base URL,
    /// HTTP client construction failure), never at generation time.
    pub fn new(config: &ReportConfig) -> Result<Self, ReportError> {
        let client = LlmClient::new(config)?;
        let policy = RetryPolicy {
            max_attempts: config.max_attempts,
            backoff_min_ms: config.backoff_min_secs.saturating_mul(1000),
            backoff_max_ms: config.backoff_max_secs.saturating_mul(1000),
        };
        Ok(Self { client, policy })
    }

    /// Produces the report for one week's record.
    ///
    /// Always returns a non-empty result; every failure mode is absorbed
    /// into the outcome variant rather than raised.
    pub async fn generate(&self, record: &WeeklyMetricRecord) -> ReportOutcome {
        let prompt = build_prompt(record);

        match retry_with_backoff(self.policy, || self.client.complete(&prompt)).await {
            Ok(text) => ReportOutcome::Generated(sanitize_text(&text)),
            Err(err) => {
                tracing::warn!(
                    date = %record.date,
                    error = %err,
                    "completion service unavailable — using deterministic template"
                );
                match fallback_report(record) {
                    Ok(text) => ReportOutcome::Fallback(text),
                    Err(template_err) => {
                        tracing::error!(
                            date = %record.date,
                            error = %template_err,
                            "fallback template could not be built"
                        );
                        ReportOutcome::Failed(Self::failure_text(record, &template_err))
                    }
                }
            }
        }
    }

    fn failure_text(record: &WeeklyMetricRecord, err: &ReportError) -> String {
        format!(
            "Unable to generate a report for the week of {}: {err}",
            record.date
        )
    }
}
