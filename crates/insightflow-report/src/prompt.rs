//! Prompt construction for the completion service.
//!
//! The prompt embeds every record field verbatim (missing fields render as
//! the documented placeholder) and pins the output to the five report
//! sections. The no-fabrication instruction matters: a model handed partial
//! data will happily invent the rest.

use insightflow_core::{display_or_placeholder, WeeklyMetricRecord};

use crate::SECTION_LABELS;

pub(crate) fn build_prompt(record: &WeeklyMetricRecord) -> String {
    let sections = SECTION_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}. {label}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert social media analytics reporter. Write a detailed, \
         insightful, and professional weekly performance summary based ONLY on \
         the following data. Highlight key insights, trends, and \
         recommendations for the week. Do NOT use a pre-existing template or \
         boilerplate text, and do NOT invent data that is not present. Fields \
         marked '{placeholder}' were not recorded this week.\n\
         \n\
         DATA:\n\
         - Week of: {date}\n\
         - Followers at start of week: {followers_start}\n\
         - Followers at end of week: {followers_end}\n\
         - Profile visits: {profile_visits}\n\
         - Reach: {reach}\n\
         - Impressions: {impressions}\n\
         - Top reel: {top_reel_label}\n\
         - Top reel shares: {top_reel_shares}\n\
         - Top reel saves: {top_reel_saves}\n\
         - Average story views: {story_views_average}\n\
         \n\
         Format the report professionally with clear sections for:\n\
         {sections}\n",
        placeholder = insightflow_core::MISSING_FIELD_PLACEHOLDER,
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
