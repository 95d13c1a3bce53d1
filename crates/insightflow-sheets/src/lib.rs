//! Google Sheets client for the weekly performance data.
//!
//! Fetches all rows of one worksheet through the Sheets v4 values endpoint
//! and validates them once at ingestion into typed
//! [`WeeklyMetricRecord`](insightflow_core::WeeklyMetricRecord)s. Blank or
//! non-numeric cells become `None` fields; rows without a parseable date are
//! skipped with a warning. An empty worksheet is not an error here; the
//! caller decides whether an empty result is terminal.

pub mod client;
pub mod error;

mod parse;
mod types;

pub use client::SheetsClient;
pub use error::SheetsError;
