use league_core::{FixtureFilter, SeasonId, StatKind};
use log::warn;
use std::env;
use std::path::PathBuf;

const DEFAULT_SEASON: &str = "3";
const DEFAULT_SEASONS: &str = "1,2,3";
const DEFAULT_CUP: &str = "25";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardMode {
    Standings,
    Fixtures,
    Stats,
    Suspensions,
    HeadToHead,
    Teams,
    Cup,
    Player,
}

impl DashboardMode {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "standings" => Some(DashboardMode::Standings),
            "fixtures" => Some(DashboardMode::Fixtures),
            "stats" => Some(DashboardMode::Stats),
            "suspensions" => Some(DashboardMode::Suspensions),
            "h2h" | "head_to_head" => Some(DashboardMode::HeadToHead),
            "teams" => Some(DashboardMode::Teams),
            "cup" | "eurocup" => Some(DashboardMode::Cup),
            "player" => Some(DashboardMode::Player),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub mode: DashboardMode,
    /// Bundled data is used when no directory is given.
    pub data_dir: Option<PathBuf>,
    pub season: SeasonId,
    pub seasons: Vec<SeasonId>,
    pub cup: SeasonId,
    pub team1: String,
    pub team2: String,
    pub filter: FixtureFilter,
    pub stat: StatKind,
    pub search: String,
    pub player: String,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        DashboardConfig::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mode = match lookup("MODE") {
            Some(name) => DashboardMode::from_name(&name).unwrap_or_else(|| {
                warn!("unknown MODE {}, showing standings", name);
                DashboardMode::Standings
            }),
            None => DashboardMode::Standings,
        };

        let filter = match lookup("FILTER") {
            Some(name) => FixtureFilter::from_name(&name).unwrap_or_else(|| {
                warn!("unknown FILTER {}, showing all fixtures", name);
                FixtureFilter::All
            }),
            None => FixtureFilter::All,
        };

        let stat = match lookup("STAT") {
            Some(name) => StatKind::from_name(&name).unwrap_or_else(|| {
                warn!("unknown STAT {}, showing goals", name);
                StatKind::Goals
            }),
            None => StatKind::Goals,
        };

        let seasons = lookup("SEASONS").unwrap_or_else(|| String::from(DEFAULT_SEASONS));

        DashboardConfig {
            mode,
            data_dir: lookup("DATA_DIR").filter(|dir| !dir.is_empty()).map(PathBuf::from),
            season: SeasonId::new(&lookup("SEASON").unwrap_or_else(|| String::from(DEFAULT_SEASON))),
            seasons: parse_season_list(&seasons),
            cup: SeasonId::new(&lookup("CUP").unwrap_or_else(|| String::from(DEFAULT_CUP))),
            team1: lookup("TEAM1").unwrap_or_default(),
            team2: lookup("TEAM2").unwrap_or_default(),
            filter,
            stat,
            search: lookup("SEARCH").unwrap_or_default(),
            player: lookup("PLAYER").unwrap_or_default(),
        }
    }
}

fn parse_season_list(list: &str) -> Vec<SeasonId> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(SeasonId::new)
        .collect()
}
