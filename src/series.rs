use crate::models::{DailyStats, User};
use crate::store::{baseline, daily_count, day_recorded};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chart flavor: growth trend or raw daily activity. Always supplied by the
/// caller, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMode {
    #[default]
    Cumulative,
    Daily,
}

/// How a daily series renders a date with no recorded entry at all.
/// `Zero` plots it as 0; `Gap` emits `null` so the chart can break the line.
/// A recorded day where the user is merely absent is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDays {
    #[default]
    Zero,
    Gap,
}

/// Running-total line per user: baseline plus every recorded count up to and
/// including each window day. Non-decreasing by construction since counts
/// are unsigned.
pub fn build_cumulative(
    users: &[User],
    stats: &DailyStats,
    window: &[String],
) -> BTreeMap<String, Vec<u64>> {
    users
        .iter()
        .map(|user| {
            let mut total = baseline(user);
            let points = window
                .iter()
                .map(|date| {
                    total += daily_count(stats, date, &user.leetcode_username);
                    total
                })
                .collect();
            (user.leetcode_username.clone(), points)
        })
        .collect()
}

/// Per-day counts per user, no accumulation.
pub fn build_absolute(
    users: &[User],
    stats: &DailyStats,
    window: &[String],
    missing: MissingDays,
) -> BTreeMap<String, Vec<Option<u64>>> {
    users
        .iter()
        .map(|user| {
            let points = window
                .iter()
                .map(|date| {
                    if missing == MissingDays::Gap && !day_recorded(stats, date) {
                        None
                    } else {
                        Some(daily_count(stats, date, &user.leetcode_username))
                    }
                })
                .collect();
            (user.leetcode_username.clone(), points)
        })
        .collect()
}
