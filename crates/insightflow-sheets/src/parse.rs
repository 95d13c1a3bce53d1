//! Row-to-record validation.
//!
//! The first row of the worksheet is the header row; every later row is
//! matched against it by column name. All coercion is lenient: a cell that
//! is blank, absent, or non-numeric simply leaves the field unset.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::Value;

use insightflow_core::WeeklyMetricRecord;

const COL_DATE: &str = "Date";
const COL_FOLLOWERS_START: &str = "Followers Start";
const COL_FOLLOWERS_END: &str = "Followers End";
const COL_PROFILE_VISITS: &str = "Profile Visits";
const COL_REACH: &str = "Reach";
const COL_IMPRESSIONS: &str = "Impressions";
const COL_TOP_REEL: &str = "Top Reels (Title or Hook) - Link";
const COL_REEL_SHARES: &str = "Reel Shares for Top Reel";
const COL_REEL_SAVES: &str = "Reel Saves for Top Reel";
const COL_STORY_VIEWS: &str = "Story Views Average";

/// Date formats accepted in the `Date` column.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Converts the raw value grid into validated records.
///
/// Rows whose `Date` cell is missing or unparseable are skipped with a
/// warning; they cannot be keyed and would be unreachable from every
/// operation downstream.
pub(crate) fn records_from_values(values: &[Vec<Value>]) -> Vec<WeeklyMetricRecord> {
    let Some((headers, rows)) = values.split_first() else {
        return Vec::new();
    };
    let index = header_index(headers);

    let mut records = Vec::with_capacity(rows.len());
    for (row_number, row) in rows.iter().enumerate() {
        let Some(date) = cell_date(row, &index, COL_DATE) else {
            tracing::warn!(
                // +2: one for the header row, one for 1-based sheet numbering.
                sheet_row = row_number + 2,
                "skipping row without a parseable date"
            );
            continue;
        };

        records.push(WeeklyMetricRecord {
            date,
            followers_start: cell_i64(row, &index, COL_FOLLOWERS_START),
            followers_end: cell_i64(row, &index, COL_FOLLOWERS_END),
            profile_visits: cell_u64(row, &index, COL_PROFILE_VISITS),
            reach: cell_u64(row, &index, COL_REACH),
            impressions: cell_u64(row, &index, COL_IMPRESSIONS),
            top_reel_label: cell_text(row, &index, COL_TOP_REEL),
            top_reel_shares: cell_u64(row, &index, COL_REEL_SHARES),
            top_reel_saves: cell_u64(row, &index, COL_REEL_SAVES),
            story_views_average: cell_f64(row, &index, COL_STORY_VIEWS),
        });
    }
    records
}

/// Maps trimmed header names to their column positions.
fn header_index(headers: &[Value]) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| h.as_str().map(|name| (name.trim().to_string(), i)))
        .collect()
}

fn cell<'a>(row: &'a [Value], index: &HashMap<String, usize>, column: &str) -> Option<&'a Value> {
    row.get(*index.get(column)?)
}

/// Non-empty trimmed text content of a cell.
fn cell_text(row: &[Value], index: &HashMap<String, usize>, column: &str) -> Option<String> {
    let text = match cell(row, index, column)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Numeric cell content. Sheets serves formatted cells as strings, so
/// thousands separators are stripped before parsing.
fn cell_f64(row: &[Value], index: &HashMap<String, usize>, column: &str) -> Option<f64> {
    match cell(row, index, column)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn cell_i64(row: &[Value], index: &HashMap<String, usize>, column: &str) -> Option<i64> {
    match cell(row, index, column)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().replace(',', "").parse::<i64>().ok(),
        _ => None,
    }
}

fn cell_u64(row: &[Value], index: &HashMap<String, usize>, column: &str) -> Option<u64> {
    match cell(row, index, column)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().replace(',', "").parse::<u64>().ok(),
        _ => None,
    }
}

fn cell_date(row: &[Value], index: &HashMap<String, usize>, column: &str) -> Option<NaiveDate> {
    let text = cell_text(row, index, column)?;
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&text, fmt).ok())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn grid() -> Vec<Vec<Value>> {
        vec![
            vec![
                json!("Date"),
                json!("Followers Start"),
                json!("Followers End"),
                json!("Profile Visits"),
                json!("Reach"),
                json!("Impressions"),
                json!("Top Reels (Title or Hook) - Link"),
                json!("Reel Shares for Top Reel"),
                json!("Reel Saves for Top Reel"),
                json!("Story Views Average"),
            ],
            vec![
                json!("2025-08-03"),
                json!("1000"),
                json!("1050"),
                json!("200"),
                json!("5,000"),
                json!(8000),
                json!("Clip A"),
                json!("30"),
                json!("12"),
                json!("450.5"),
            ],
        ]
    }

    #[test]
    fn parses_a_well_formed_row() {
        let records = records_from_values(&grid());
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.date.to_string(), "2025-08-03");
        assert_eq!(r.followers_start, Some(1000));
        assert_eq!(r.followers_end, Some(1050));
        assert_eq!(r.profile_visits, Some(200));
        assert_eq!(r.reach, Some(5000), "thousands separator should be stripped");
        assert_eq!(r.impressions, Some(8000), "numeric cells parse directly");
        assert_eq!(r.top_reel_label.as_deref(), Some("Clip A"));
        assert_eq!(r.top_reel_shares, Some(30));
        assert_eq!(r.top_reel_saves, Some(12));
        assert_eq!(r.story_views_average, Some(450.5));
    }

    #[test]
    fn blank_and_non_numeric_cells_become_none() {
        let mut g = grid();
        g[1][1] = json!("");
        g[1][3] = json!("N/A");
        let records = records_from_values(&g);
        assert_eq!(records[0].followers_start, None);
        assert_eq!(records[0].profile_visits, None);
        assert_eq!(records[0].followers_end, Some(1050));
    }

    #[test]
    fn short_rows_leave_trailing_fields_unset() {
        let mut g = grid();
        g[1].truncate(3);
        let records = records_from_values(&g);
        assert_eq!(records[0].followers_end, Some(1050));
        assert_eq!(records[0].profile_visits, None);
        assert_eq!(records[0].story_views_average, None);
    }

    #[test]
    fn rows_without_a_date_are_skipped() {
        let mut g = grid();
        g[1][0] = json!("sometime in August");
        assert!(records_from_values(&g).is_empty());
    }

    #[test]
    fn slash_dates_are_accepted() {
        let mut g = grid();
        g[1][0] = json!("08/03/2025");
        let records = records_from_values(&g);
        assert_eq!(records[0].date.to_string(), "2025-08-03");
    }

    #[test]
    fn header_only_grid_yields_no_records() {
        let g = vec![grid().remove(0)];
        assert!(records_from_values(&g).is_empty());
    }

    #[test]
    fn empty_grid_yields_no_records() {
        assert!(records_from_values(&[]).is_empty());
    }

    #[test]
    fn negative_follower_counts_parse_as_i64() {
        // Counts should never be negative in practice, but the start/end pair
        // must round-trip as signed so the derived growth can be negative.
        let mut g = grid();
        g[1][1] = json!("1100");
        let records = records_from_values(&g);
        assert_eq!(records[0].follower_growth(), Some(-50));
    }
}
