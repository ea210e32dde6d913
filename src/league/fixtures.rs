use crate::models::match_result::MatchResult;

/// Fixtures split for the games page
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixtureList {
    /// Played matches, most recent first
    pub played: Vec<MatchResult>,
    /// Matches without a final score, soonest first
    pub upcoming: Vec<MatchResult>,
}

/// Split fixtures into played and upcoming lists.
///
/// Matches on the same date are ordered by id so the lists do not depend
/// on input order.
pub fn split_fixtures(matches: &[MatchResult]) -> FixtureList {
    let (mut played, mut upcoming): (Vec<MatchResult>, Vec<MatchResult>) =
        matches.iter().cloned().partition(MatchResult::is_played);

    played.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    FixtureList { played, upcoming }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::match_result::TeamScore;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn game(day: u32, home: Option<i64>, away: Option<i64>) -> MatchResult {
        MatchResult {
            id: Uuid::new_v4(),
            date: Utc.with_ymd_and_hms(2024, 9, day, 14, 0, 0).unwrap(),
            home: TeamScore::new("KR", home),
            away: TeamScore::new("Fram", away),
        }
    }

    #[test]
    fn test_split_fixtures_orders_each_list() {
        let games = vec![
            game(7, Some(1), Some(0)),
            game(28, None, None),
            game(14, Some(2), Some(2)),
            game(21, Some(-1), Some(0)),
        ];

        let fixtures = split_fixtures(&games);

        let played_days: Vec<_> = fixtures.played.iter().map(|g| g.date).collect();
        assert_eq!(played_days, vec![games[2].date, games[0].date]);

        let upcoming_days: Vec<_> = fixtures.upcoming.iter().map(|g| g.date).collect();
        assert_eq!(upcoming_days, vec![games[3].date, games[1].date]);
    }

    #[test]
    fn test_same_day_fixtures_ordered_by_id() {
        let mut first = game(7, None, None);
        let mut second = game(7, None, None);
        first.id = Uuid::from_u128(1);
        second.id = Uuid::from_u128(2);

        let fixtures = split_fixtures(&[second.clone(), first.clone()]);
        assert_eq!(fixtures.upcoming, vec![first, second]);
        assert!(fixtures.played.is_empty());
    }
}
