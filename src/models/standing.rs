// src/models/standing.rs
use serde::{Deserialize, Serialize};

/// One team's line in the league table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingRow {
    /// Empty line for a team that has not played yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}
