use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One tracked user, as listed in `users.json`. Roster order is meaningful:
/// it fixes legend order and breaks leaderboard ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub leetcode_username: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "totalSolved", default, skip_serializing_if = "Option::is_none")]
    pub total_solved: Option<u64>,
}

/// Per-user solved counts for one calendar day, keyed by leetcode username.
pub type DayCounts = BTreeMap<String, u64>;

/// Sparse day -> user -> count table. Serialized transparently so the
/// on-disk file is the bare `{"YYYY-MM-DD": {"user": n}}` document the
/// collector maintains.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DailyStats {
    pub days: BTreeMap<String, DayCounts>,
}

/// Roster plus stats table, replaced wholesale on each collector cycle and
/// read-only while a request computes over it.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub stats: DailyStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayEntry {
    pub username: String,
    pub display_name: String,
    pub solved: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub entries: Vec<TodayEntry>,
}

/// One user's chart line. `points` align 1:1 with the window dates; a point
/// is `null` only in daily mode with `missing=gap`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserSeries {
    pub username: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub points: Vec<Option<u64>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub dates: Vec<String>,
    pub series: Vec<UserSeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub username: String,
    pub display_name: String,
    pub score: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub as_of: String,
    pub entries: Vec<RankedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakRecord {
    pub username: String,
    pub display_name: String,
    pub current: u32,
    pub max: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreaksResponse {
    pub as_of: String,
    pub streaks: Vec<StreakRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub date: String,
    pub updated: usize,
}
