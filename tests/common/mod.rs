#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

use league_standings::models::match_result::{MatchResult, TeamScore};
use league_standings::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Played fixture with both scores known
pub fn played(home: &str, home_score: i64, away: &str, away_score: i64) -> MatchResult {
    fixture(home, Some(home_score), away, Some(away_score))
}

/// Fixture that has not been played yet
pub fn unplayed(home: &str, away: &str) -> MatchResult {
    fixture(home, None, away, None)
}

pub fn fixture(home: &str, home_score: Option<i64>, away: &str, away_score: Option<i64>) -> MatchResult {
    MatchResult {
        id: Uuid::new_v4(),
        date: Utc.with_ymd_and_hms(2024, 9, 7, 14, 0, 0).unwrap(),
        home: TeamScore::new(home, home_score),
        away: TeamScore::new(away, away_score),
    }
}

/// Write a matches file under the temp dir and return its path
pub fn write_matches_file(contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("matches-{}.json", Uuid::new_v4()));
    std::fs::write(&path, contents).expect("Failed to write matches file");
    path
}
