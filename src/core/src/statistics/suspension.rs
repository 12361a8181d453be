use crate::statistics::{PlayerStat, Suspension};
use crate::{Team, team_by_id};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "card", content = "count")]
pub enum CardRecord {
    Red(u32),
    Yellow(u32),
}

impl CardRecord {
    /// Red cards take precedence whenever the player has any.
    pub fn of(player: &PlayerStat) -> Self {
        if player.red_cards > 0 {
            CardRecord::Red(player.red_cards)
        } else {
            CardRecord::Yellow(player.yellow_cards)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspendedPlayer<'s> {
    pub player: &'s PlayerStat,
    pub team: Option<&'s Team>,
    pub suspension: &'s Suspension,
    pub cards: CardRecord,
}

pub fn suspended_players<'s>(teams: &'s [Team], player_stats: &'s [PlayerStat]) -> Vec<SuspendedPlayer<'s>> {
    player_stats
        .iter()
        .filter_map(|player| {
            player.suspension.as_ref().map(|suspension| SuspendedPlayer {
                player,
                team: player.team_id.and_then(|id| team_by_id(teams, id)),
                suspension,
                cards: CardRecord::of(player),
            })
        })
        .collect()
}
