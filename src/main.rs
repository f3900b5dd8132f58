use leet_tracker::collector::{self, resolve_poll_interval};
use leet_tracker::models::Snapshot;
use leet_tracker::{load_stats, load_users, resolve_stats_path, resolve_users_path};
use leet_tracker::{router, AppState};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let users_path = resolve_users_path();
    let stats_path = resolve_stats_path();
    if let Some(parent) = stats_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let snapshot = Snapshot {
        users: load_users(&users_path).await,
        stats: load_stats(&stats_path).await,
    };
    let poll_interval = resolve_poll_interval();
    let state = AppState::new(users_path, stats_path, snapshot, poll_interval);

    if poll_interval.is_zero() {
        info!("collector disabled (POLL_INTERVAL_SECS=0)");
    } else {
        info!("polling LeetCode every {}s", poll_interval.as_secs());
        tokio::spawn(collector::run(state.clone()));
    }

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
