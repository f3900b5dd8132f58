use crate::collector;
use crate::dates::{available_dates_up_to, today_date, today_key, trailing_window};
use crate::errors::AppError;
use crate::leaderboard::{self, ScorePolicy};
use crate::models::{
    LeaderboardResponse, RefreshResponse, SeriesResponse, StreaksResponse, TodayEntry,
    TodayResponse, User, UserSeries,
};
use crate::series::{build_absolute, build_cumulative, MissingDays, SeriesMode};
use crate::state::AppState;
use crate::store::daily_count;
use crate::streaks::{build_streaks, DEFAULT_LOOKBACK_DAYS};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

pub async fn index() -> Html<String> {
    Html(render_index(&today_key()))
}

pub async fn get_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let snapshot = state.snapshot.lock().await;
    Json(snapshot.users.clone())
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let date = today_key();
    let snapshot = state.snapshot.lock().await;
    let entries = snapshot
        .users
        .iter()
        .map(|user| TodayEntry {
            username: user.leetcode_username.clone(),
            display_name: user.display_name.clone(),
            solved: daily_count(&snapshot.stats, &date, &user.leetcode_username),
        })
        .collect();

    Json(TodayResponse { date, entries })
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    #[serde(default)]
    pub mode: SeriesMode,
    /// Trailing window length in days; absent means every recorded date up
    /// to today.
    pub days: Option<usize>,
    #[serde(default)]
    pub missing: MissingDays,
}

pub async fn get_series(
    State(state): State<AppState>,
    Query(params): Query<SeriesQuery>,
) -> Result<Json<SeriesResponse>, AppError> {
    let today = today_key();
    let snapshot = state.snapshot.lock().await;

    let dates = match params.days {
        Some(days) => trailing_window(days)?,
        None => available_dates_up_to(&snapshot.stats, &today),
    };

    let mut points_by_user = match params.mode {
        SeriesMode::Cumulative => build_cumulative(&snapshot.users, &snapshot.stats, &dates)
            .into_iter()
            .map(|(username, points)| (username, points.into_iter().map(Some).collect()))
            .collect(),
        SeriesMode::Daily => build_absolute(&snapshot.users, &snapshot.stats, &dates, params.missing),
    };

    // roster order, not map order, so the legend is stable
    let series = snapshot
        .users
        .iter()
        .map(|user| UserSeries {
            username: user.leetcode_username.clone(),
            display_name: user.display_name.clone(),
            color: user.color.clone(),
            points: points_by_user
                .remove(&user.leetcode_username)
                .unwrap_or_default(),
        })
        .collect();

    Ok(Json(SeriesResponse { dates, series }))
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub by: ScorePolicy,
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> Json<LeaderboardResponse> {
    let as_of = today_key();
    let snapshot = state.snapshot.lock().await;
    let entries = leaderboard::rank(&snapshot.users, &snapshot.stats, params.by, &as_of);

    Json(LeaderboardResponse { as_of, entries })
}

#[derive(Debug, Deserialize)]
pub struct StreaksQuery {
    pub lookback: Option<usize>,
}

pub async fn get_streaks(
    State(state): State<AppState>,
    Query(params): Query<StreaksQuery>,
) -> Json<StreaksResponse> {
    let as_of = today_date();
    let lookback = params.lookback.unwrap_or(DEFAULT_LOOKBACK_DAYS);
    let snapshot = state.snapshot.lock().await;
    let streaks = build_streaks(&snapshot.users, &snapshot.stats, as_of, lookback);

    Json(StreaksResponse {
        as_of: as_of.to_string(),
        streaks,
    })
}

pub async fn refresh_now(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let response = collector::collect_once(&state).await?;
    Ok(Json(response))
}
