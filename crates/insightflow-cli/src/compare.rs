//! The `compare` subcommand: week-over-week changes across chosen weeks.

use chrono::NaiveDate;

use insightflow_core::{week_over_week, WeekComparison, WeeklyMetricRecord};

pub(crate) fn run(records: &[WeeklyMetricRecord], dates: &[NaiveDate]) -> anyhow::Result<()> {
    if dates.len() < 2 {
        anyhow::bail!("compare needs at least two dates");
    }

    let selected = dates
        .iter()
        .map(|d| {
            insightflow_core::by_date(records, *d)
                .ok_or_else(|| anyhow::anyhow!("no data found for week {d}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for pair in selected.windows(2) {
        println!("{}", render(&week_over_week(pair[0], pair[1])));
    }
    Ok(())
}

fn render(cmp: &WeekComparison) -> String {
    format!(
        "{prev} -> {curr}\n\
         - Follower change:       {followers}\n\
         - Profile visit change:  {visits}\n\
         - Growth ({prev}):       {prev_growth}\n\
         - Growth ({curr}):       {curr_growth}\n",
        prev = cmp.prev_date,
        curr = cmp.curr_date,
        followers = render_pct(cmp.follower_change_pct),
        visits = render_pct(cmp.profile_visit_change_pct),
        prev_growth = render_growth(cmp.prev_growth),
        curr_growth = render_growth(cmp.curr_growth),
    )
}

fn render_pct(value: Option<f64>) -> String {
    value.map_or_else(
        || insightflow_core::MISSING_FIELD_PLACEHOLDER.to_string(),
        |v| format!("{v:+.1}%"),
    )
}

fn render_growth(value: Option<i64>) -> String {
    value.map_or_else(
        || insightflow_core::MISSING_FIELD_PLACEHOLDER.to_string(),
        |v| format!("{v:+}"),
    )
}
