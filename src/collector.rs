use crate::dates::{today_date, today_key};
use crate::errors::AppError;
use crate::models::RefreshResponse;
use crate::state::AppState;
use crate::storage::{load_users, persist_stats};
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::{collections::BTreeMap, env, time::Duration};
use tokio::time::sleep;
use tracing::{error, info, warn};

const GRAPHQL_URL: &str = "https://leetcode.com/graphql/";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const BETWEEN_USERS: Duration = Duration::from_secs(1);

pub fn resolve_poll_interval() -> Duration {
    let secs = env::var("POLL_INTERVAL_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(300);
    Duration::from_secs(secs)
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    #[serde(rename = "matchedUser")]
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
struct MatchedUser {
    #[serde(rename = "userCalendar")]
    user_calendar: Option<UserCalendar>,
}

#[derive(Debug, Deserialize)]
struct UserCalendar {
    // JSON-encoded string: unix timestamp of a UTC day -> submission count
    #[serde(rename = "submissionCalendar")]
    submission_calendar: Option<String>,
}

fn parse_calendar(raw: &str) -> Result<BTreeMap<String, u64>, AppError> {
    serde_json::from_str(raw)
        .map_err(|err| AppError::upstream(format!("bad submission calendar: {err}")))
}

fn count_for_day(calendar: &BTreeMap<String, u64>, day: NaiveDate) -> u64 {
    for (timestamp, count) in calendar {
        let Ok(secs) = timestamp.parse::<i64>() else {
            continue;
        };
        let Some(moment) = DateTime::from_timestamp(secs, 0) else {
            continue;
        };
        if moment.date_naive() == day {
            return *count;
        }
    }
    0
}

/// One user's solved count for `day`, from the LeetCode submission
/// calendar.
async fn fetch_day_count(client: &Client, username: &str, day: NaiveDate) -> Result<u64, AppError> {
    let query = format!(
        r#"query userProfileCalendar {{
            matchedUser(username: "{username}") {{
                userCalendar {{
                    submissionCalendar
                }}
            }}
        }}"#
    );

    let response: GraphqlResponse = client
        .post(GRAPHQL_URL)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .json(&serde_json::json!({ "query": query }))
        .send()
        .await?
        .json()
        .await?;

    if let Some(err) = response.errors.first() {
        return Err(AppError::upstream(err.message.clone()));
    }

    let calendar = response
        .data
        .and_then(|data| data.matched_user)
        .and_then(|user| user.user_calendar)
        .and_then(|calendar| calendar.submission_calendar)
        .ok_or_else(|| AppError::upstream(format!("no calendar data for {username}")))?;

    Ok(count_for_day(&parse_calendar(&calendar)?, day))
}

/// One collector cycle: re-read the roster, fetch each user's count for
/// today, fold the results into the snapshot, persist. Only today's entry
/// is touched; history is never rewritten. A failed fetch skips that user
/// for the cycle, leaving their entry absent (read as zero downstream).
pub async fn collect_once(state: &AppState) -> Result<RefreshResponse, AppError> {
    let users = load_users(&state.users_path).await;
    let date = today_key();
    let day = today_date();

    info!("fetching stats for {} users", users.len());
    let mut fetched = Vec::with_capacity(users.len());
    for (index, user) in users.iter().enumerate() {
        if index > 0 {
            // upstream rate limit
            sleep(BETWEEN_USERS).await;
        }
        match fetch_day_count(&state.client, &user.leetcode_username, day).await {
            Ok(count) => {
                info!("{}: {count} solved today", user.leetcode_username);
                fetched.push((user.leetcode_username.clone(), count));
            }
            Err(err) => {
                warn!("fetch failed for {}: {}", user.leetcode_username, err.message);
            }
        }
    }

    let updated = fetched.len();
    let stats = {
        let mut snapshot = state.snapshot.lock().await;
        snapshot.users = users;
        // today's entry exists even when every fetch failed
        let today_counts = snapshot.stats.days.entry(date.clone()).or_default();
        for (username, count) in fetched {
            today_counts.insert(username, count);
        }
        snapshot.stats.clone()
    };
    persist_stats(&state.stats_path, &stats).await?;

    Ok(RefreshResponse { date, updated })
}

/// Poll forever at the configured interval. The first cycle runs
/// immediately so a fresh deployment has data without waiting a tick.
pub async fn run(state: AppState) {
    let mut ticker = tokio::time::interval(state.poll_interval);
    loop {
        ticker.tick().await;
        if let Err(err) = collect_once(&state).await {
            error!("collector cycle failed: {}", err.message);
        }
    }
}
