pub mod app;
pub mod collector;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod leaderboard;
pub mod models;
pub mod series;
pub mod state;
pub mod storage;
pub mod store;
pub mod streaks;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_stats, load_users, resolve_stats_path, resolve_users_path};
