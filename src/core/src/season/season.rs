use crate::league::{Fixture, LeagueTable};
use crate::statistics::{PlayerCard, PlayerStat};
use crate::Team;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Season token such as "1" or "24". Integer tokens order numerically and come before any other token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SeasonId(String);

impl SeasonId {
    pub fn new(id: &str) -> Self {
        SeasonId(String::from(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeasonId {
    fn from(id: &str) -> Self {
        SeasonId::new(id)
    }
}

impl Display for SeasonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for SeasonId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.parse::<u64>(), other.0.parse::<u64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for SeasonId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Teams, fixtures and player stats of one competition edition.
/// Absent collections stay `None` so callers can tell them apart from empty ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonData {
    pub teams: Option<Vec<Team>>,
    pub fixtures: Option<Vec<Fixture>>,
    pub player_stats: Vec<PlayerStat>,
}

impl SeasonData {
    pub fn new(teams: Vec<Team>, fixtures: Vec<Fixture>, player_stats: Vec<PlayerStat>) -> Self {
        SeasonData {
            teams: Some(teams),
            fixtures: Some(fixtures),
            player_stats,
        }
    }

    pub fn empty() -> Self {
        SeasonData::new(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn teams(&self) -> &[Team] {
        self.teams.as_deref().unwrap_or(&[])
    }

    pub fn fixtures(&self) -> &[Fixture] {
        self.fixtures.as_deref().unwrap_or(&[])
    }

    pub fn player_stats(&self) -> &[PlayerStat] {
        &self.player_stats
    }

    pub fn standings(&self) -> LeagueTable {
        LeagueTable::calculate(self.teams.as_deref(), self.fixtures.as_deref())
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        crate::team_by_id(self.teams(), id)
    }

    pub fn player_card(&self, player_name: &str) -> Option<PlayerCard<'_>> {
        self.player_stats
            .iter()
            .find(|p| p.name == player_name)
            .map(|player| PlayerCard {
                player,
                team: player.team_id.and_then(|id| self.team(id)),
            })
    }
}
