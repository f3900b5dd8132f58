use crate::errors::AppError;
use crate::models::DailyStats;
use chrono::{Duration, Local, NaiveDate};

/// Today's calendar date (server-local) as a `YYYY-MM-DD` key.
pub fn today_key() -> String {
    Local::now().date_naive().to_string()
}

pub fn today_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Exactly `n` consecutive calendar days ending today, ascending. Days with
/// no recorded data are included like any other; gaps are never skipped.
pub fn trailing_window(n: usize) -> Result<Vec<String>, AppError> {
    trailing_window_at(today_date(), n)
}

pub fn trailing_window_at(today: NaiveDate, n: usize) -> Result<Vec<String>, AppError> {
    if n == 0 {
        return Err(AppError::bad_request("window length must be positive"));
    }

    let mut window = Vec::with_capacity(n);
    for offset in (0..n).rev() {
        window.push((today - Duration::days(offset as i64)).to_string());
    }
    Ok(window)
}

/// Recorded date keys at or before `cutoff`, ascending. A stale fetch or
/// clock skew can leave a future-dated key in the table; those are dropped.
pub fn available_dates_up_to(stats: &DailyStats, cutoff: &str) -> Vec<String> {
    stats
        .days
        .keys()
        .filter(|date| date.as_str() <= cutoff)
        .cloned()
        .collect()
}
