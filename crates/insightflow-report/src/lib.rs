//! Weekly report generation for InsightFlow.
//!
//! Turns one [`WeeklyMetricRecord`](insightflow_core::WeeklyMetricRecord)
//! into a prose report: preferably via the configured chat-completions
//! service (OpenRouter or anything OpenAI-compatible), falling back to a
//! deterministic template assembled from the record's fields when the
//! service call fails, and returning a short error string only when even
//! the template cannot be built. [`ReportGenerator::generate`] never
//! returns `Err`; every failure mode is absorbed into [`ReportOutcome`].

pub mod error;
pub mod export;
pub mod generator;
pub mod sanitize;
pub mod types;

mod client;
mod fallback;
mod prompt;
mod retry;

pub use error::ReportError;
pub use export::write_report;
pub use generator::ReportGenerator;
pub use sanitize::sanitize_text;
pub use types::{ReportConfig, ReportOutcome};

/// The five section labels every report carries, generated or fallback.
pub const SECTION_LABELS: [&str; 5] = [
    "Weekly Overview",
    "Key Metrics Analysis",
    "Content Performance",
    "Growth Insights",
    "Recommendations",
];
