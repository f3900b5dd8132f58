use crate::dates::available_dates_up_to;
use crate::models::{DailyStats, RankedEntry, User};
use crate::store::{baseline, daily_count};
use serde::{Deserialize, Serialize};

/// Which number the leaderboard sorts by. The dashboard historically showed
/// all three at different times; the caller picks one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePolicy {
    /// Count recorded for `as_of` itself.
    Today,
    /// Count on the most recent recorded day at or before `as_of`.
    Latest,
    /// Baseline plus every recorded count at or before `as_of`.
    #[default]
    Total,
}

pub fn score(policy: ScorePolicy, stats: &DailyStats, user: &User, as_of: &str) -> u64 {
    let username = &user.leetcode_username;
    match policy {
        ScorePolicy::Today => daily_count(stats, as_of, username),
        ScorePolicy::Latest => available_dates_up_to(stats, as_of)
            .last()
            .map(|date| daily_count(stats, date, username))
            .unwrap_or(0),
        ScorePolicy::Total => {
            baseline(user)
                + available_dates_up_to(stats, as_of)
                    .iter()
                    .map(|date| daily_count(stats, date, username))
                    .sum::<u64>()
        }
    }
}

/// Rank the roster by the chosen score, highest first. Sort is stable, so
/// equal scores keep roster order; ranks are dense and 1-based, never
/// shared.
pub fn rank(
    users: &[User],
    stats: &DailyStats,
    policy: ScorePolicy,
    as_of: &str,
) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = users
        .iter()
        .map(|user| RankedEntry {
            rank: 0,
            username: user.leetcode_username.clone(),
            display_name: user.display_name.clone(),
            score: score(policy, stats, user, as_of),
        })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }
    entries
}
