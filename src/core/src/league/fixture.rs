use serde::Serialize;

/// Wire marker for a fixture that has been played. Any other status string means "not played".
pub const PLAYED_STATUS_MARKER: &str = "Oynandı";
pub const NOT_PLAYED_STATUS_MARKER: &str = "Oynanmadı";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum FixtureStatus {
    Played,
    NotPlayed,
}

impl FixtureStatus {
    pub fn from_marker(marker: &str) -> Self {
        if marker == PLAYED_STATUS_MARKER {
            FixtureStatus::Played
        } else {
            FixtureStatus::NotPlayed
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            FixtureStatus::Played => PLAYED_STATUS_MARKER,
            FixtureStatus::NotPlayed => NOT_PLAYED_STATUS_MARKER,
        }
    }

    pub fn is_played(&self) -> bool {
        *self == FixtureStatus::Played
    }
}

impl From<FixtureStatus> for String {
    fn from(status: FixtureStatus) -> Self {
        String::from(status.marker())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub status: FixtureStatus,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub week: Option<u32>,
    pub date: Option<String>,
    pub stage_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Fixture {
    pub fn new(home_team_id: u32, away_team_id: u32) -> Self {
        Fixture {
            home_team_id,
            away_team_id,
            status: FixtureStatus::NotPlayed,
            home_score: None,
            away_score: None,
            week: None,
            date: None,
            stage_name: None,
        }
    }

    pub fn played(home_team_id: u32, away_team_id: u32, home_score: u32, away_score: u32) -> Self {
        Fixture {
            status: FixtureStatus::Played,
            home_score: Some(home_score),
            away_score: Some(away_score),
            ..Fixture::new(home_team_id, away_team_id)
        }
    }

    pub fn with_week(mut self, week: u32) -> Self {
        self.week = Some(week);
        self
    }

    pub fn with_stage(mut self, stage_name: &str) -> Self {
        self.stage_name = Some(String::from(stage_name));
        self
    }

    /// Score pair of a fixture that counts: played status and both scores present.
    pub fn result(&self) -> Option<(u32, u32)> {
        if !self.status.is_played() {
            return None;
        }

        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<FixtureOutcome> {
        self.result().map(|(home, away)| {
            if home > away {
                FixtureOutcome::HomeWin
            } else if home < away {
                FixtureOutcome::AwayWin
            } else {
                FixtureOutcome::Draw
            }
        })
    }

    /// Either orientation counts.
    pub fn is_between(&self, team1_id: u32, team2_id: u32) -> bool {
        (self.home_team_id == team1_id && self.away_team_id == team2_id)
            || (self.home_team_id == team2_id && self.away_team_id == team1_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_marker_recognition() {
        assert_eq!(FixtureStatus::from_marker("Oynandı"), FixtureStatus::Played);
        assert_eq!(FixtureStatus::from_marker("Oynanmadı"), FixtureStatus::NotPlayed);
        assert_eq!(FixtureStatus::from_marker("Ertelendi"), FixtureStatus::NotPlayed);
        assert_eq!(FixtureStatus::from_marker(""), FixtureStatus::NotPlayed);
    }

    #[test]
    fn test_result_requires_both_scores() {
        let mut fixture = Fixture::played(1, 2, 2, 1);
        assert_eq!(fixture.result(), Some((2, 1)));

        fixture.away_score = None;
        assert_eq!(fixture.result(), None);
        assert_eq!(fixture.outcome(), None);
    }

    #[test]
    fn test_result_ignores_scores_of_unplayed_fixture() {
        let mut fixture = Fixture::played(1, 2, 2, 1);
        fixture.status = FixtureStatus::NotPlayed;

        assert_eq!(fixture.result(), None);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(Fixture::played(1, 2, 3, 0).outcome(), Some(FixtureOutcome::HomeWin));
        assert_eq!(Fixture::played(1, 2, 0, 1).outcome(), Some(FixtureOutcome::AwayWin));
        assert_eq!(Fixture::played(1, 2, 2, 2).outcome(), Some(FixtureOutcome::Draw));
    }

    #[test]
    fn test_is_between_either_orientation() {
        let fixture = Fixture::new(4, 7);

        assert!(fixture.is_between(4, 7));
        assert!(fixture.is_between(7, 4));
        assert!(!fixture.is_between(4, 5));
    }
}
