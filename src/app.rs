use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/users", get(handlers::get_users))
        .route("/api/today", get(handlers::get_today))
        .route("/api/series", get(handlers::get_series))
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        .route("/api/streaks", get(handlers::get_streaks))
        .route("/api/refresh", post(handlers::refresh_now))
        .with_state(state)
}
