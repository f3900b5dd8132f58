use crate::models::Snapshot;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub users_path: PathBuf,
    pub stats_path: PathBuf,
    pub snapshot: Arc<Mutex<Snapshot>>,
    pub client: reqwest::Client,
    pub poll_interval: Duration,
}

impl AppState {
    pub fn new(
        users_path: PathBuf,
        stats_path: PathBuf,
        snapshot: Snapshot,
        poll_interval: Duration,
    ) -> Self {
        Self {
            users_path,
            stats_path,
            snapshot: Arc::new(Mutex::new(snapshot)),
            client: reqwest::Client::new(),
            poll_interval,
        }
    }
}
