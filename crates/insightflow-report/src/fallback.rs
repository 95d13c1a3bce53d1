//! The deterministic fallback template.
//!
//! Assembled purely from record fields, with no generation and no network. Covers
//! the same five sections as the generated report so downstream consumers
//! see one shape regardless of which path produced the text.

use insightflow_core::{display_or_placeholder, WeeklyMetricRecord};

use crate::error::ReportError;

/// Builds the fixed-format report for `record`.
///
/// Missing fields render as the documented placeholder. The derived growth
/// line is signed (`+50`, `-12`) when both follower endpoints are present.
///
/// # Errors
///
/// Returns [`ReportError::EmptyRecord`] when the record carries no metric
/// fields at all; there is nothing to report on.
pub(crate) fn fallback_report(record: &WeeklyMetricRecord) -> Result<String, ReportError> {
    if record.is_structurally_empty() {
        return Err(ReportError::EmptyRecord);
    }

    let growth = record
        .follower_growth()
        .map_or_else(|| insightflow_core::MISSING_FIELD_PLACEHOLDER.to_string(), |g| format!("{g:+}"));

    Ok(format!(
        "Weekly Performance Report ({date})\n\
         \n\
         1. Weekly Overview\n\
         - Account finished the week at {followers_end} followers\n\
         - The week started at {followers_start} followers\n\
         \n\
         2. Key Metrics Analysis\n\
         - Profile Visits: {profile_visits}\n\
         - Reach: {reach}\n\
         - Impressions: {impressions}\n\
         \n\
         3. Content Performance\n\
         - Top Reel: {top_reel_label}\n\
         - Top Reel Shares: {top_reel_shares}\n\
         - Top Reel Saves: {top_reel_saves}\n\
         - Average Story Views: {story_views_average}\n\
         \n\
         4. Growth Insights\n\
         - Follower Growth: {growth} ({followers_start} to {followers_end})\n\
         - Engagement: {profile_visits} profile visits this week\n\
         \n\
         5. Recommendations\n\
         - Compare this week's follower growth ({growth}) against recent weeks before adjusting strategy\n\
         - Build on the format of the top reel: {top_reel_label}\n",
        date = record.date,
        followers_start = display_or_placeholder(record.followers_start),
        followers_end = display_or_placeholder(record.followers_end),
        profile_visits = display_or_placeholder(record.profile_visits),
        reach = display_or_placeholder(record.reach),
        impressions = display_or_placeholder(record.impressions),
        top_reel_label = display_or_placeholder(record.top_reel_label.as_deref()),
        top_reel_shares = display_or_placeholder(record.top_reel_shares),
        top_reel_saves = display_or_placeholder(record.top_reel_saves),
        story_views_average = display_or_placeholder(record.story_views_average),
    ))
}
