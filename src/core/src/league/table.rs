use crate::league::Fixture;
use crate::{compare_names, Team};
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

const WIN_POINTS: u32 = 3;
const DRAW_POINTS: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueTable {
    rows: Vec<StandingRow>,
}

impl LeagueTable {
    /// Folds played fixtures into a ranked table. Either collection being absent yields an empty table.
    pub fn calculate(teams: Option<&[Team]>, fixtures: Option<&[Fixture]>) -> Self {
        let (Some(teams), Some(fixtures)) = (teams, fixtures) else {
            debug!("standings requested without teams or fixtures");
            return LeagueTable::default();
        };

        let mut rows: Vec<StandingRow> = teams.iter().cloned().map(StandingRow::new).collect();

        let mut positions: HashMap<u32, usize> = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            positions.entry(row.team.id).or_insert(position);
        }

        for fixture in fixtures {
            let Some((home_score, away_score)) = fixture.result() else {
                continue;
            };

            let (Some(&home), Some(&away)) = (
                positions.get(&fixture.home_team_id),
                positions.get(&fixture.away_team_id),
            ) else {
                debug!(
                    "skip fixture {} - {}: unknown team",
                    fixture.home_team_id, fixture.away_team_id
                );
                continue;
            };

            rows[home].add_result(home_score, away_score);
            rows[away].add_result(away_score, home_score);
        }

        for row in rows.iter_mut() {
            row.goal_difference = i64::from(row.goals_for) - i64::from(row.goals_against);
        }

        rows.sort_by(StandingRow::rank_cmp);

        LeagueTable { rows }
    }

    pub fn rows(&self) -> &[StandingRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<StandingRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, team_id: u32) -> Option<&StandingRow> {
        self.rows.iter().find(|r| r.team.id == team_id)
    }

    /// 1-based league rank
    pub fn position(&self, team_id: u32) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.team.id == team_id)
            .map(|idx| idx + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    #[serde(flatten)]
    pub team: Team,
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingRow {
    pub fn new(team: Team) -> Self {
        StandingRow {
            team,
            played: 0,
            win: 0,
            draw: 0,
            loss: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    fn add_result(&mut self, scored: u32, conceded: u32) {
        // counters saturate, a corrupt score must not abort the table
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.win = self.win.saturating_add(1);
                self.points = self.points.saturating_add(WIN_POINTS);
            }
            Ordering::Less => {
                self.loss = self.loss.saturating_add(1);
            }
            Ordering::Equal => {
                self.draw = self.draw.saturating_add(1);
                self.points = self.points.saturating_add(DRAW_POINTS);
            }
        }
    }

    /// Points, goal difference, goals scored (all descending), then name ascending by [`compare_names`].
    fn rank_cmp(a: &StandingRow, b: &StandingRow) -> Ordering {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| compare_names(&a.team.name, &b.team.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::FixtureStatus;

    fn teams() -> Vec<Team> {
        vec![Team::new(1, "A"), Team::new(2, "B"), Team::new(3, "C")]
    }

    fn calculate(teams: &[Team], fixtures: &[Fixture]) -> LeagueTable {
        LeagueTable::calculate(Some(teams), Some(fixtures))
    }

    fn order(table: &LeagueTable) -> Vec<&str> {
        table.rows().iter().map(|r| r.team.name.as_str()).collect()
    }

    #[test]
    fn test_win_awards_three_points() {
        let teams = vec![Team::new(1, "Team A"), Team::new(2, "Team B")];
        let fixtures = vec![Fixture::played(1, 2, 3, 1)];

        let table = calculate(&teams, &fixtures);

        let team_a = table.row(1).unwrap();
        let team_b = table.row(2).unwrap();
        assert_eq!(team_a.points, 3);
        assert_eq!(team_a.win, 1);
        assert_eq!(team_b.points, 0);
        assert_eq!(team_b.loss, 1);
    }

    #[test]
    fn test_sorts_by_points_then_goal_difference() {
        let teams = vec![Team::new(1, "Team A"), Team::new(2, "Team B")];
        let fixtures = vec![Fixture::played(1, 2, 1, 0), Fixture::played(2, 1, 3, 0)];

        let table = calculate(&teams, &fixtures);

        assert_eq!(table.rows()[0].team.id, 2);
        assert_eq!(table.rows()[1].team.id, 1);
    }

    #[test]
    fn test_empty_fixtures_give_zeroed_rows() {
        let teams = vec![Team::new(1, "Team A")];

        let table = calculate(&teams, &[]);

        let team_a = table.row(1).unwrap();
        assert_eq!(team_a.played, 0);
        assert_eq!(team_a.points, 0);
        assert_eq!(team_a.goal_difference, 0);
    }

    #[test]
    fn test_absent_input_gives_empty_table() {
        let teams = teams();
        let fixtures = vec![Fixture::played(1, 2, 1, 0)];

        assert!(LeagueTable::calculate(None, Some(fixtures.as_slice())).is_empty());
        assert!(LeagueTable::calculate(Some(teams.as_slice()), None).is_empty());
        assert!(LeagueTable::calculate(None, None).is_empty());
    }

    #[test]
    fn test_three_team_table() {
        let teams = teams();
        let fixtures = vec![
            Fixture::played(1, 2, 3, 0),
            Fixture::played(1, 3, 2, 0),
            Fixture::played(2, 3, 2, 1),
        ];

        let table = calculate(&teams, &fixtures);

        assert_eq!(order(&table), vec!["A", "B", "C"]);

        let rows = table.rows();
        assert_eq!((rows[0].points, rows[0].goal_difference), (6, 5));
        assert_eq!((rows[1].points, rows[1].goal_difference), (3, -2));
        assert_eq!((rows[2].points, rows[2].goal_difference), (0, -3));
    }

    #[test]
    fn test_draw_breaks_points_tie() {
        let teams = teams();
        let fixtures = vec![
            Fixture::played(1, 2, 1, 0),
            Fixture::played(2, 3, 5, 0),
            Fixture::played(3, 1, 2, 2),
        ];

        let table = calculate(&teams, &fixtures);

        assert_eq!(order(&table), vec!["A", "B", "C"]);

        let a = table.row(1).unwrap();
        assert_eq!((a.points, a.draw, a.goal_difference), (4, 1, 1));

        let c = table.row(3).unwrap();
        assert_eq!((c.points, c.goal_difference), (1, -5));
    }

    #[test]
    fn test_unplayed_fixture_is_ignored() {
        let teams = teams();
        let mut fixtures = vec![Fixture::new(3, 1), Fixture::played(1, 2, 2, 2)];
        fixtures[0].status = FixtureStatus::from_marker("Oynanmadı");

        let table = calculate(&teams, &fixtures);

        let c = table.row(3).unwrap();
        assert_eq!(c.played, 0);
        assert_eq!(c.points, 0);
        assert_eq!(table.row(1).unwrap().played, 1);
    }

    #[test]
    fn test_played_fixture_with_missing_score_is_ignored() {
        let teams = teams();
        let mut fixture = Fixture::played(1, 2, 4, 0);
        fixture.home_score = None;

        let table = calculate(&teams, &[fixture]);

        assert!(table.rows().iter().all(|r| r.played == 0 && r.goals_for == 0));
    }

    #[test]
    fn test_unknown_team_fixture_is_skipped() {
        let teams = teams();
        let fixtures = vec![Fixture::played(1, 42, 5, 0), Fixture::played(2, 3, 1, 0)];

        let table = calculate(&teams, &fixtures);

        let a = table.row(1).unwrap();
        assert_eq!(a.played, 0);
        assert_eq!(a.goals_for, 0);
        assert_eq!(table.row(2).unwrap().points, 3);
    }

    #[test]
    fn test_full_tie_orders_by_name() {
        let teams = vec![Team::new(1, "Zeytinburnu"), Team::new(2, "Adana"), Team::new(3, "Bursa")];
        let fixtures = vec![Fixture::played(1, 2, 1, 1)];

        let table = calculate(&teams, &fixtures);

        assert_eq!(order(&table), vec!["Adana", "Zeytinburnu", "Bursa"]);
    }

    #[test]
    fn test_full_tie_ignores_case_and_accents() {
        let teams = vec![
            Team::new(1, "Bursa"),
            Team::new(2, "Denizli"),
            Team::new(3, "adana"),
            Team::new(4, "Çaykur"),
        ];

        let table = calculate(&teams, &[]);

        assert_eq!(order(&table), vec!["adana", "Bursa", "Çaykur", "Denizli"]);
    }

    #[test]
    fn test_huge_scores_saturate_instead_of_overflowing() {
        let teams = vec![Team::new(1, "A"), Team::new(2, "B")];
        let fixtures = vec![Fixture::played(1, 2, u32::MAX, 0), Fixture::played(1, 2, 1, 0)];

        let table = calculate(&teams, &fixtures);

        let a = table.row(1).unwrap();
        assert_eq!(a.goals_for, u32::MAX);
        assert_eq!(a.goal_difference, i64::from(u32::MAX));
        assert_eq!(a.points, 6);

        let b = table.row(2).unwrap();
        assert_eq!(b.goals_against, u32::MAX);
        assert_eq!(b.goal_difference, -i64::from(u32::MAX));
        assert_eq!(table.position(1), Some(1));
    }

    #[test]
    fn test_goals_for_breaks_goal_difference_tie() {
        let teams = vec![Team::new(1, "A"), Team::new(2, "B"), Team::new(3, "C"), Team::new(4, "D")];
        let fixtures = vec![Fixture::played(1, 3, 1, 0), Fixture::played(2, 4, 3, 2)];

        let table = calculate(&teams, &fixtures);

        assert_eq!(table.position(2), Some(1));
        assert_eq!(table.position(1), Some(2));
    }

    #[test]
    fn test_team_fields_pass_through() {
        let teams = vec![
            Team::new(1, "A").with_captain("Hakan").with_budget(12.5),
            Team::new(2, "B"),
        ];

        let table = calculate(&teams, &[]);

        let a = table.row(1).unwrap();
        assert_eq!(a.team, teams[0]);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let teams = teams();
        let fixtures = vec![Fixture::played(1, 2, 0, 0), Fixture::played(3, 2, 1, 4)];

        let first = calculate(&teams, &fixtures);
        let second = calculate(&teams, &fixtures);

        assert_eq!(first, second);
        assert_eq!(teams.len(), 3);
    }

    #[test]
    fn test_duplicate_team_id_uses_first_team() {
        let teams = vec![Team::new(1, "A"), Team::new(1, "A bis"), Team::new(2, "B")];
        let fixtures = vec![Fixture::played(1, 2, 2, 0)];

        let table = calculate(&teams, &fixtures);

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].team.name, "A");
        assert_eq!(table.rows()[0].points, 3);
    }
}
