use crate::models::{DailyStats, StreakRecord, User};
use crate::store::daily_count;
use chrono::{Duration, NaiveDate};

/// Cap on how far back the current-streak scan walks. The stats table can
/// grow without bound, so the scan must terminate even for a user who has
/// solved something every day since the table began.
pub const DEFAULT_LOOKBACK_DAYS: usize = 365;

/// Consecutive days with at least one solve, ending at `as_of` and counting
/// backward for at most `lookback_days` days.
///
/// A zero on `as_of` itself does not end the streak: the day may simply not
/// have been attempted yet, so it contributes nothing but the scan carries
/// on to yesterday. A zero on any strictly earlier day ends the scan.
pub fn current_streak(
    stats: &DailyStats,
    username: &str,
    as_of: NaiveDate,
    lookback_days: usize,
) -> u32 {
    let mut streak = 0;
    for offset in 0..lookback_days {
        let date = (as_of - Duration::days(offset as i64)).to_string();
        let count = daily_count(stats, &date, username);
        if count > 0 {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}

/// Longest run of consecutive active days anywhere in the recorded history,
/// not windowed. Scans recorded dates most-recent-first; a zero-count day
/// resets the run, and so does a calendar gap between recorded dates (an
/// unrecorded day is a zero day).
pub fn max_streak(stats: &DailyStats, username: &str) -> u32 {
    let mut max = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for key in stats.days.keys().rev() {
        let Ok(date) = key.parse::<NaiveDate>() else {
            continue;
        };
        if let Some(prev) = previous {
            if prev - date > Duration::days(1) {
                run = 0;
            }
        }
        if daily_count(stats, key, username) > 0 {
            run += 1;
            max = max.max(run);
        } else {
            run = 0;
        }
        previous = Some(date);
    }

    max
}

/// Streaks for the whole roster, in roster order.
pub fn build_streaks(
    users: &[User],
    stats: &DailyStats,
    as_of: NaiveDate,
    lookback_days: usize,
) -> Vec<StreakRecord> {
    users
        .iter()
        .map(|user| StreakRecord {
            username: user.leetcode_username.clone(),
            display_name: user.display_name.clone(),
            current: current_streak(stats, &user.leetcode_username, as_of, lookback_days),
            max: max_streak(stats, &user.leetcode_username),
        })
        .collect()
}
