use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::match_result::MatchResult;
use crate::models::standing::StandingRow;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// Running totals for one team while the table is being built
#[derive(Debug, Default)]
struct Tally {
    played: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u64,
    goals_against: u64,
}

impl Tally {
    fn record(&mut self, own: u64, opponent: u64) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(own);
        self.goals_against = self.goals_against.saturating_add(opponent);

        match own.cmp(&opponent) {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.draws += 1,
            Ordering::Less => self.losses += 1,
        }
    }

    fn into_row(self, name: &str) -> StandingRow {
        let goals_for = i64::try_from(self.goals_for).unwrap_or(i64::MAX);
        let goals_against = i64::try_from(self.goals_against).unwrap_or(i64::MAX);

        StandingRow {
            name: name.to_string(),
            played: self.played,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            goal_difference: goals_for.saturating_sub(goals_against),
            points: POINTS_FOR_WIN
                .saturating_mul(self.wins)
                .saturating_add(POINTS_FOR_DRAW.saturating_mul(self.draws)),
        }
    }
}

/// Build the league table from a set of fixtures.
///
/// Every team named in a fixture gets a row, including teams whose fixtures
/// are all unplayed. A fixture without two non-negative scores, or with the
/// same team on both sides, contributes nothing beyond the team names. Rows
/// are ordered by points, goal difference and goals scored (all
/// descending), then by name.
#[tracing::instrument(
    name = "Compute standings",
    skip(matches),
    fields(match_count = matches.len())
)]
pub fn compute_standings(matches: &[MatchResult]) -> Vec<StandingRow> {
    let mut table: HashMap<&str, Tally> = HashMap::new();
    let mut skipped = 0usize;

    for game in matches {
        let home = game.home.name.as_str();
        let away = game.away.name.as_str();

        // A team cannot play itself; such a record only registers the name.
        let counted = game.final_score().filter(|_| home != away);

        match counted {
            Some(score) => {
                table.entry(home).or_default().record(score.home, score.away);
                table.entry(away).or_default().record(score.away, score.home);
            }
            None => {
                table.entry(home).or_default();
                table.entry(away).or_default();
                skipped += 1;
                tracing::debug!(
                    "Match {} ({} - {}) has no final score or no opponent, not counted",
                    game.id, home, away
                );
            }
        }
    }

    let mut standings: Vec<StandingRow> = table
        .into_iter()
        .map(|(name, tally)| tally.into_row(name))
        .collect();
    standings.sort_by(compare_standings);

    tracing::debug!(
        "Computed standings for {} teams ({} matches not counted)",
        standings.len(),
        skipped
    );

    standings
}

/// League ordering: points, goal difference, goals scored, then name.
pub fn compare_standings(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.name.cmp(&b.name))
}
