use crate::league::Fixture;
use crate::season::{SeasonCollection, SeasonId};
use crate::team_by_name;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

/// A fixture between two named teams, tagged with the season it came from.
/// Team ids are season-local, so `(season_id, team id)` is the only unambiguous key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadMatch {
    pub season_id: SeasonId,
    pub team1_id: u32,
    pub team2_id: u32,
    #[serde(flatten)]
    pub fixture: Fixture,
}

/// Every fixture between `team1_name` and `team2_name` in every season where both names exist.
/// Result order is season order, then fixture order inside the season.
pub fn find_matches_by_team_names(
    team1_name: &str,
    team2_name: &str,
    seasons: &SeasonCollection,
) -> Vec<HeadToHeadMatch> {
    if team1_name.is_empty() || team2_name.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();

    for (season_id, season) in seasons {
        let teams = season.teams();

        let (Some(team1), Some(team2)) = (
            team_by_name(teams, team1_name),
            team_by_name(teams, team2_name),
        ) else {
            debug!(
                "season {}: {} or {} did not compete",
                season_id, team1_name, team2_name
            );
            continue;
        };

        matches.extend(
            season
                .fixtures()
                .iter()
                .filter(|f| f.is_between(team1.id, team2.id))
                .map(|fixture| HeadToHeadMatch {
                    season_id: season_id.clone(),
                    team1_id: team1.id,
                    team2_id: team2.id,
                    fixture: fixture.clone(),
                }),
        );
    }

    debug!(
        "found {} matches between {} and {}",
        matches.len(),
        team1_name,
        team2_name
    );

    matches
}

/// Single-season lookup by team id.
pub fn find_head_to_head_matches(team1_id: u32, team2_id: u32, fixtures: &[Fixture]) -> Vec<&Fixture> {
    fixtures
        .iter()
        .filter(|f| f.is_between(team1_id, team2_id))
        .collect()
}

/// Stable sort by season, then week. Fixtures without a week go last within their season.
pub fn sort_chronologically(matches: &mut [HeadToHeadMatch]) {
    matches.sort_by(|a, b| {
        a.season_id
            .cmp(&b.season_id)
            .then_with(|| compare_weeks(a.fixture.week, b.fixture.week))
    });
}

fn compare_weeks(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
