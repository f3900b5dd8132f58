use crate::errors::AppError;
use crate::models::{DailyStats, User};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_users_path() -> PathBuf {
    env::var("USERS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/users.json"))
}

pub fn resolve_stats_path() -> PathBuf {
    env::var("STATS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/daily_stats.json"))
}

/// Roster file. A missing or unreadable roster is an empty roster; the
/// dashboard stays up and renders empty rather than failing to start.
pub async fn load_users(path: &Path) -> Vec<User> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(users) => users,
            Err(err) => {
                error!("failed to parse users file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read users file: {err}");
            Vec::new()
        }
    }
}

pub async fn load_stats(path: &Path) -> DailyStats {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(stats) => stats,
            Err(err) => {
                error!("failed to parse stats file: {err}");
                DailyStats::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => DailyStats::default(),
        Err(err) => {
            error!("failed to read stats file: {err}");
            DailyStats::default()
        }
    }
}

pub async fn persist_stats(path: &Path, stats: &DailyStats) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(stats).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
