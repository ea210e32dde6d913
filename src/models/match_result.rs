// src/models/match_result.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One side of a fixture: the team name and its final score, if known.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<i64>,
}

impl TeamScore {
    pub fn new(name: impl Into<String>, score: Option<i64>) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// The score as a goal count. Negative scores are not goals.
    pub fn goals(&self) -> Option<u64> {
        self.score.and_then(|score| u64::try_from(score).ok())
    }
}

/// A scheduled or played game between two teams
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub home: TeamScore,
    pub away: TeamScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub home: u64,
    pub away: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl MatchResult {
    /// Both scores, when the match has been played.
    pub fn final_score(&self) -> Option<FinalScore> {
        match (self.home.goals(), self.away.goals()) {
            (Some(home), Some(away)) => Some(FinalScore { home, away }),
            _ => None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.final_score().is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.final_score().map(|score| match score.home.cmp(&score.away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::AwayWin,
        })
    }
}

/// Flat game row as returned by the games query (teams joined by name)
#[derive(Debug, Deserialize, Clone)]
pub struct GameRow {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub home_name: String,
    pub home_score: Option<i64>,
    pub away_name: String,
    pub away_score: Option<i64>,
}

impl From<GameRow> for MatchResult {
    fn from(row: GameRow) -> Self {
        MatchResult {
            id: row.id,
            date: row.date,
            home: TeamScore::new(row.home_name, row.home_score),
            away: TeamScore::new(row.away_name, row.away_score),
        }
    }
}

// Anything that is not an integer is an absent score, so one odd value
// never rejects the whole record.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}
