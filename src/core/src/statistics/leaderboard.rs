use crate::statistics::{PlayerStat, StatKind};
use crate::{Team, team_by_id};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry<'s> {
    pub player: &'s PlayerStat,
    pub team: Option<&'s Team>,
    pub value: u32,
}

/// Players ordered by the chosen stat, highest first. Equal values keep their input order.
pub fn leaderboard<'s>(
    player_stats: &'s [PlayerStat],
    teams: &'s [Team],
    kind: StatKind,
) -> Vec<LeaderboardEntry<'s>> {
    let mut entries: Vec<LeaderboardEntry<'s>> = player_stats
        .iter()
        .map(|player| LeaderboardEntry {
            player,
            team: player.team_id.and_then(|id| team_by_id(teams, id)),
            value: player.stat(kind),
        })
        .collect();

    entries.sort_by(|a, b| b.value.cmp(&a.value));

    entries
}
