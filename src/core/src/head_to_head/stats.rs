use crate::head_to_head::HeadToHeadMatch;
use crate::league::FixtureOutcome;
use crate::season::SeasonCollection;
use serde::Serialize;

/// Win/draw tallies between two sides. `team1` is the reference team, `team2` is everyone else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadStats {
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub draws: u32,
}

impl HeadToHeadStats {
    /// The home side of each match is resolved to a name through its own season's team list.
    /// A home team that cannot be resolved is never the reference team.
    pub fn calculate(
        matches: &[HeadToHeadMatch],
        reference_team_name: &str,
        seasons: &SeasonCollection,
    ) -> Self {
        let mut stats = HeadToHeadStats::default();

        for head_to_head in matches {
            let Some(outcome) = head_to_head.fixture.outcome() else {
                continue;
            };

            let home_is_reference = seasons
                .get(&head_to_head.season_id)
                .and_then(|season| season.team(head_to_head.fixture.home_team_id))
                .is_some_and(|team| team.name == reference_team_name);

            match outcome {
                FixtureOutcome::Draw => stats.draws += 1,
                FixtureOutcome::HomeWin if home_is_reference => stats.team1_wins += 1,
                FixtureOutcome::HomeWin => stats.team2_wins += 1,
                FixtureOutcome::AwayWin if home_is_reference => stats.team2_wins += 1,
                FixtureOutcome::AwayWin => stats.team1_wins += 1,
            }
        }

        stats
    }

    pub fn total(&self) -> u32 {
        self.team1_wins + self.team2_wins + self.draws
    }
}
