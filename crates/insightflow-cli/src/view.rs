//! The `view` subcommand: print one week's metrics.

use chrono::NaiveDate;

use insightflow_core::{display_or_placeholder, engagement_rate, WeeklyMetricRecord};

pub(crate) fn run(records: &[WeeklyMetricRecord], date: Option<NaiveDate>) -> anyhow::Result<()> {
    let record = match date {
        Some(d) => insightflow_core::by_date(records, d)
            .ok_or_else(|| anyhow::anyhow!("no data found for week {d}"))?,
        None => insightflow_core::latest(records)
            .ok_or_else(|| anyhow::anyhow!("no weekly records available"))?,
    };

    println!("{}", render(record));
    Ok(())
}

fn render(record: &WeeklyMetricRecord) -> String {
    let growth = record
        .follower_growth()
        .map_or_else(|| insightflow_core::MISSING_FIELD_PLACEHOLDER.to_string(), |g| format!("{g:+}"));
    let engagement = engagement_rate(record)
        .map_or_else(|| insightflow_core::MISSING_FIELD_PLACEHOLDER.to_string(), |r| format!("{r:.1}%"));

    format!(
        "Week of {date}\n\
         \n\
         Growth\n\
         - Followers Start:     {followers_start}\n\
         - Followers End:       {followers_end}\n\
         - Growth:              {growth}\n\
         \n\
         Engagement\n\
         - Profile Visits:      {profile_visits}\n\
         - Reach:               {reach}\n\
         - Impressions:         {impressions}\n\
         - Engagement Rate:     {engagement}\n\
         \n\
         Top Reel\n\
         - Description:         {top_reel_label}\n\
         - Shares:              {top_reel_shares}\n\
         - Saves:               {top_reel_saves}\n\
         \n\
         Avg Story Views:       {story_views_average}",
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
    )
}
