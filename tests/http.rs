use chrono::{Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct LeaderboardResponse {
    as_of: String,
    entries: Vec<RankedEntry>,
}

#[derive(Debug, Deserialize)]
struct RankedEntry {
    rank: u32,
    username: String,
    display_name: String,
    score: u64,
}

#[derive(Debug, Deserialize)]
struct StreaksResponse {
    streaks: Vec<StreakRecord>,
}

#[derive(Debug, Deserialize)]
struct StreakRecord {
    username: String,
    current: u32,
    max: u32,
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    dates: Vec<String>,
    series: Vec<UserSeries>,
}

#[derive(Debug, Deserialize)]
struct UserSeries {
    username: String,
    points: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct TodayResponse {
    date: String,
    entries: Vec<TodayEntry>,
}

#[derive(Debug, Deserialize)]
struct TodayEntry {
    username: String,
    solved: u64,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn key(date: NaiveDate) -> String {
    date.to_string()
}

/// Roster: alice (baseline 10) and bob (baseline 5). Stats cover the last
/// three days; alice skipped the middle day, bob solved every day.
fn seed_data_files() -> (String, String) {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut dir = std::env::temp_dir();
    dir.push(format!("leet_tracker_http_{}_{}", std::process::id(), nanos));
    std::fs::create_dir_all(&dir).expect("create temp data dir");

    let users_path = dir.join("users.json");
    let stats_path = dir.join("daily_stats.json");

    let users = serde_json::json!([
        {
            "leetcode_username": "alice",
            "display_name": "Alice",
            "color": "#FF006E",
            "totalSolved": 10
        },
        {
            "leetcode_username": "bob",
            "display_name": "Bob",
            "totalSolved": 5
        }
    ]);

    let d0 = key(today());
    let d1 = key(today() - Duration::days(1));
    let d2 = key(today() - Duration::days(2));
    let stats = serde_json::json!({
        d2: { "alice": 2, "bob": 1 },
        d1: { "alice": 0, "bob": 1 },
        d0: { "alice": 3, "bob": 1 }
    });

    std::fs::write(&users_path, serde_json::to_vec_pretty(&users).unwrap()).unwrap();
    std::fs::write(&stats_path, serde_json::to_vec_pretty(&stats).unwrap()).unwrap();

    (
        users_path.to_string_lossy().to_string(),
        stats_path.to_string_lossy().to_string(),
    )
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + std::time::Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(std::time::Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let (users_path, stats_path) = seed_data_files();
    let child = Command::new(env!("CARGO_BIN_EXE_leet_tracker"))
        .env("PORT", port.to_string())
        .env("USERS_PATH", users_path)
        .env("STATS_PATH", stats_path)
        .env("POLL_INTERVAL_SECS", "0")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_today_reports_seeded_counts() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response: TodayResponse = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.date, key(today()));
    assert_eq!(response.entries.len(), 2);
    let alice = response
        .entries
        .iter()
        .find(|entry| entry.username == "alice")
        .unwrap();
    assert_eq!(alice.solved, 3);
}

#[tokio::test]
async fn http_leaderboard_total_includes_baseline() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let board: LeaderboardResponse = client
        .get(format!("{}/api/leaderboard?by=total", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(board.as_of, key(today()));
    assert_eq!(board.entries.len(), 2);
    // alice: 10 + 2 + 0 + 3, bob: 5 + 1 + 1 + 1
    assert_eq!(board.entries[0].username, "alice");
    assert_eq!(board.entries[0].display_name, "Alice");
    assert_eq!(board.entries[0].score, 15);
    assert_eq!(board.entries[0].rank, 1);
    assert_eq!(board.entries[1].username, "bob");
    assert_eq!(board.entries[1].score, 8);
    assert_eq!(board.entries[1].rank, 2);
}

#[tokio::test]
async fn http_leaderboard_today_ranks_by_daily_count() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let board: LeaderboardResponse = client
        .get(format!("{}/api/leaderboard?by=today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(board.entries[0].username, "alice");
    assert_eq!(board.entries[0].score, 3);
    assert_eq!(board.entries[1].username, "bob");
    assert_eq!(board.entries[1].score, 1);
}

#[tokio::test]
async fn http_streaks_break_on_zero_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response: StreaksResponse = client
        .get(format!("{}/api/streaks", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let alice = response
        .streaks
        .iter()
        .find(|record| record.username == "alice")
        .unwrap();
    // yesterday's zero breaks the run
    assert_eq!(alice.current, 1);
    assert_eq!(alice.max, 1);

    let bob = response
        .streaks
        .iter()
        .find(|record| record.username == "bob")
        .unwrap();
    assert_eq!(bob.current, 3);
    assert_eq!(bob.max, 3);
}

#[tokio::test]
async fn http_cumulative_series_runs_from_baseline() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response: SeriesResponse = client
        .get(format!(
            "{}/api/series?mode=cumulative&days=3",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.dates.len(), 3);
    assert_eq!(response.dates[2], key(today()));
    // roster order
    assert_eq!(response.series[0].username, "alice");
    assert_eq!(
        response.series[0].points,
        vec![Some(12), Some(12), Some(15)]
    );
    assert_eq!(response.series[1].username, "bob");
    assert_eq!(response.series[1].points, vec![Some(6), Some(7), Some(8)]);
}

#[tokio::test]
async fn http_daily_series_marks_unrecorded_days_as_gaps() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response: SeriesResponse = client
        .get(format!(
            "{}/api/series?mode=daily&days=4&missing=gap",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.dates.len(), 4);
    // four days ago is not in the table at all
    assert_eq!(
        response.series[0].points,
        vec![None, Some(2), Some(0), Some(3)]
    );
    assert_eq!(
        response.series[1].points,
        vec![None, Some(1), Some(1), Some(1)]
    );
}

#[tokio::test]
async fn http_series_rejects_zero_day_window() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/series?days=0", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
