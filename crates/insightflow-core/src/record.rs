//! The typed weekly metric record.
//!
//! One record is one row of the weekly performance sheet, validated once at
//! ingestion. Every metric field is optional: the sheet routinely has blank
//! or non-numeric cells, and a missing field must degrade to a placeholder
//! in rendered text rather than fail the report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder rendered wherever a missing field is interpolated into text.
pub const MISSING_FIELD_PLACEHOLDER: &str = "not available";

/// One week of account performance metrics.
///
/// Records are read-only snapshots supplied by the sheet for the duration of
/// one request; nothing in this workspace mutates or persists them. `date`
/// identifies the reporting week and is the unique key within a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMetricRecord {
    pub date: NaiveDate,
    pub followers_start: Option<i64>,
    pub followers_end: Option<i64>,
    pub profile_visits: Option<u64>,
    pub reach: Option<u64>,
    pub impressions: Option<u64>,
    /// Title/hook or link of the best-performing reel.
    pub top_reel_label: Option<String>,
    pub top_reel_shares: Option<u64>,
    pub top_reel_saves: Option<u64>,
    pub story_views_average: Option<f64>,
}

impl WeeklyMetricRecord {
    /// Returns a record for `date` with every metric field unset.
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            followers_start: None,
            followers_end: None,
            profile_visits: None,
            reach: None,
            impressions: None,
            top_reel_label: None,
            top_reel_shares: None,
            top_reel_saves: None,
            story_views_average: None,
        }
    }

    /// Net follower change for the week (`followers_end - followers_start`).
    ///
    /// May be negative. `None` when either endpoint is missing.
    #[must_use]
    pub fn follower_growth(&self) -> Option<i64> {
        Some(self.followers_end? - self.followers_start?)
    }

    /// Returns `true` when no metric field at all carries a value.
    ///
    /// Such a record cannot produce even the deterministic fallback report.
    #[must_use]
    pub fn is_structurally_empty(&self) -> bool {
        self.followers_start.is_none()
            && self.followers_end.is_none()
            && self.profile_visits.is_none()
            && self.reach.is_none()
            && self.impressions.is_none()
            && self.top_reel_label.is_none()
            && self.top_reel_shares.is_none()
            && self.top_reel_saves.is_none()
            && self.story_views_average.is_none()
    }
}

/// Formats an optional field value, substituting the documented placeholder
/// when the field is missing.
#[must_use]
pub fn display_or_placeholder<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING_FIELD_PLACEHOLDER.to_string(), |v| v.to_string())
}
