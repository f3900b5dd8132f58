use crate::models::{DailyStats, User};

/// Recorded count for a user on a day. Absent date keys and absent user
/// entries both read as zero; every higher-level computation goes through
/// here so the "unknown means zero" policy lives in exactly one place.
pub fn daily_count(stats: &DailyStats, date: &str, username: &str) -> u64 {
    stats
        .days
        .get(date)
        .and_then(|counts| counts.get(username))
        .copied()
        .unwrap_or(0)
}

/// Whether the day is recorded at all, even as an empty object. Lets the
/// series builder tell "no data for the day" from "recorded zero".
pub fn day_recorded(stats: &DailyStats, date: &str) -> bool {
    stats.days.contains_key(date)
}

/// Pre-existing solved total carried on the roster entry, zero if unset.
pub fn baseline(user: &User) -> u64 {
    user.total_solved.unwrap_or(0)
}
