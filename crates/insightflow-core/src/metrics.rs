//! Pure analysis helpers over collections of weekly records.
//!
//! Everything here is arithmetic over in-memory snapshots; the rendering of
//! these numbers belongs to the application shell.

use chrono::NaiveDate;

use crate::record::WeeklyMetricRecord;

/// Returns the most recent record by date, or `None` for an empty slice.
#[must_use]
pub fn latest(records: &[WeeklyMetricRecord]) -> Option<&WeeklyMetricRecord> {
    records.iter().max_by_key(|r| r.date)
}

/// Returns the record for exactly `date`, if present.
#[must_use]
pub fn by_date(records: &[WeeklyMetricRecord], date: NaiveDate) -> Option<&WeeklyMetricRecord> {
    records.iter().find(|r| r.date == date)
}

/// Profile visits as a percentage of end-of-week followers.
///
/// `None` when either field is missing or the follower count is zero.
#[must_use]
pub fn engagement_rate(record: &WeeklyMetricRecord) -> Option<f64> {
    let visits = record.profile_visits?;
    let followers = record.followers_end?;
    if followers <= 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(visits as f64 / followers as f64 * 100.0)
}

/// Week-over-week deltas between two records.
///
/// Percentage fields are `None` when the earlier week's base value is
/// missing or zero.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekComparison {
    pub prev_date: NaiveDate,
    pub curr_date: NaiveDate,
    /// Percent change in end-of-week followers.
    pub follower_change_pct: Option<f64>,
    /// Percent change in profile visits.
    pub profile_visit_change_pct: Option<f64>,
    pub prev_growth: Option<i64>,
    pub curr_growth: Option<i64>,
}

/// Compares two weeks, `prev` being the earlier one.
#[must_use]
pub fn week_over_week(prev: &WeeklyMetricRecord, curr: &WeeklyMetricRecord) -> WeekComparison {
    WeekComparison {
        prev_date: prev.date,
        curr_date: curr.date,
        follower_change_pct: pct_change(prev.followers_end, curr.followers_end),
        profile_visit_change_pct: pct_change(
            prev.profile_visits.map(i64::try_from).and_then(Result::ok),
            curr.profile_visits.map(i64::try_from).and_then(Result::ok),
        ),
        prev_growth: prev.follower_growth(),
        curr_growth: curr.follower_growth(),
    }
}

fn pct_change(prev: Option<i64>, curr: Option<i64>) -> Option<f64> {
    let prev = prev?;
    let curr = curr?;
    if prev == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some((curr - prev) as f64 / prev as f64 * 100.0)
}
