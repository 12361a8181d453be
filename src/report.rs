use crate::config::{DashboardConfig, DashboardMode};
use color_eyre::Result;
use database::LeagueDatabase;
use league_core::{
    HeadToHeadMatch, HeadToHeadStats, Logging, SeasonCollection, SeasonData, find_matches_by_team_names,
    group_by_stage, group_by_week, leaderboard, search_teams, sort_chronologically,
    suspended_players,
};
use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadReport<'a> {
    pub team1: &'a str,
    pub team2: &'a str,
    /// Every team name known across the loaded seasons.
    pub available_teams: Vec<&'a str>,
    pub stats: HeadToHeadStats,
    pub matches: Vec<HeadToHeadMatch>,
}

impl<'a> HeadToHeadReport<'a> {
    pub fn build(team1: &'a str, team2: &'a str, seasons: &'a SeasonCollection) -> Self {
        let mut matches = find_matches_by_team_names(team1, team2, seasons);
        let stats = HeadToHeadStats::calculate(&matches, team1, seasons);

        sort_chronologically(&mut matches);

        HeadToHeadReport {
            team1,
            team2,
            available_teams: seasons
                .unique_teams()
                .into_iter()
                .map(|team| team.name.as_str())
                .collect(),
            stats,
            matches,
        }
    }
}

/// Runs the computation selected by `config.mode` and returns it as pretty JSON.
pub fn report(config: &DashboardConfig, data: &LeagueDatabase) -> Result<String> {
    let empty = SeasonData::empty();

    let season = data.seasons.get(&config.season).unwrap_or_else(|| {
        warn!("season {} is not loaded", config.season);
        &empty
    });

    info!("building {:?} report for season {}", config.mode, config.season);

    let json = match config.mode {
        DashboardMode::Standings => {
            let table = Logging::estimate_result(|| season.standings(), "calculate standings");
            serde_json::to_string_pretty(table.rows())?
        }
        DashboardMode::Fixtures => {
            let fixtures = config.filter.apply(season.fixtures());
            serde_json::to_string_pretty(&group_by_week(&fixtures))?
        }
        DashboardMode::Stats => serde_json::to_string_pretty(&leaderboard(
            season.player_stats(),
            season.teams(),
            config.stat,
        ))?,
        DashboardMode::Suspensions => {
            serde_json::to_string_pretty(&suspended_players(season.teams(), season.player_stats()))?
        }
        DashboardMode::HeadToHead => serde_json::to_string_pretty(&HeadToHeadReport::build(
            &config.team1,
            &config.team2,
            &data.seasons,
        ))?,
        DashboardMode::Teams => {
            serde_json::to_string_pretty(&search_teams(season.teams(), &config.search))?
        }
        DashboardMode::Cup => {
            let cup = data.cups.get(&config.cup).unwrap_or_else(|| {
                warn!("cup {} is not loaded", config.cup);
                &empty
            });
            serde_json::to_string_pretty(&group_by_stage(cup.fixtures()))?
        }
        DashboardMode::Player => {
            let card = season.player_card(&config.player);
            if card.is_none() {
                warn!("player {} not found in season {}", config.player, config.season);
            }
            serde_json::to_string_pretty(&card)?
        }
    };

    Ok(json)
}
