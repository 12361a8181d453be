use crate::loaders::{DatabaseEntity, FixtureEntity, PlayerStatEntity, SeasonEntity, TeamEntity};
use league_core::{
    Fixture, FixtureStatus, PlayerStat, SeasonCollection, SeasonData, SeasonId, Suspension, Team,
};

pub struct LeagueDatabase {
    pub seasons: SeasonCollection,
    pub cups: SeasonCollection,
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: DatabaseEntity) -> LeagueDatabase {
        LeagueDatabase {
            seasons: DatabaseGenerator::generate_collection(data.seasons),
            cups: DatabaseGenerator::generate_collection(data.cups),
        }
    }

    fn generate_collection(entities: Vec<(String, SeasonEntity)>) -> SeasonCollection {
        entities
            .into_iter()
            .map(|(id, entity)| (SeasonId::new(&id), SeasonGenerator::generate(entity)))
            .collect()
    }
}

/// Maps a wire season onto core types. Absent `teams`/`fixtures` stay absent.
pub struct SeasonGenerator;

impl SeasonGenerator {
    pub fn generate(entity: SeasonEntity) -> SeasonData {
        SeasonData {
            teams: entity
                .teams
                .map(|teams| teams.into_iter().map(SeasonGenerator::generate_team).collect()),
            fixtures: entity
                .fixtures
                .map(|fixtures| fixtures.into_iter().map(SeasonGenerator::generate_fixture).collect()),
            player_stats: entity
                .player_stats
                .unwrap_or_default()
                .into_iter()
                .map(SeasonGenerator::generate_player_stat)
                .collect(),
        }
    }

    fn generate_team(team: TeamEntity) -> Team {
        Team {
            id: team.id,
            name: team.name,
            logo: team.logo,
            captain: team.captain,
            players: team.players,
            budget: team.budget,
        }
    }

    fn generate_fixture(fixture: FixtureEntity) -> Fixture {
        Fixture {
            home_team_id: fixture.home_team_id,
            away_team_id: fixture.away_team_id,
            status: FixtureStatus::from_marker(&fixture.status),
            home_score: fixture.home_score,
            away_score: fixture.away_score,
            week: fixture.week,
            date: fixture.date,
            stage_name: fixture.stage_name,
        }
    }

    fn generate_player_stat(player: PlayerStatEntity) -> PlayerStat {
        PlayerStat {
            name: player.name,
            team_id: player.team_id,
            goals: player.goals,
            assists: player.assists,
            clean_sheets: player.clean_sheets,
            yellow_cards: player.yellow_cards,
            red_cards: player.red_cards,
            suspension: player.suspension.map(|s| Suspension {
                reason: s.reason,
                banned_week: s.banned_week,
            }),
        }
    }
}
