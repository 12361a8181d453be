use crate::Team;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub name: String,
    pub team_id: Option<u32>,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub suspension: Option<Suspension>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suspension {
    pub reason: String,
    pub banned_week: u32,
}

impl PlayerStat {
    pub fn new(name: &str, team_id: u32) -> Self {
        PlayerStat {
            name: String::from(name),
            team_id: Some(team_id),
            ..PlayerStat::default()
        }
    }

    pub fn without_team(mut self) -> Self {
        self.team_id = None;
        self
    }

    pub fn with_goals(mut self, goals: u32) -> Self {
        self.goals = goals;
        self
    }

    pub fn with_assists(mut self, assists: u32) -> Self {
        self.assists = assists;
        self
    }

    pub fn with_clean_sheets(mut self, clean_sheets: u32) -> Self {
        self.clean_sheets = clean_sheets;
        self
    }

    pub fn with_cards(mut self, yellow_cards: u32, red_cards: u32) -> Self {
        self.yellow_cards = yellow_cards;
        self.red_cards = red_cards;
        self
    }

    pub fn with_suspension(mut self, reason: &str, banned_week: u32) -> Self {
        self.suspension = Some(Suspension {
            reason: String::from(reason),
            banned_week,
        });
        self
    }

    pub fn stat(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Goals => self.goals,
            StatKind::Assists => self.assists,
            StatKind::CleanSheets => self.clean_sheets,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    Goals,
    Assists,
    CleanSheets,
}

impl StatKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "goals" => Some(StatKind::Goals),
            "assists" => Some(StatKind::Assists),
            "cleanSheets" | "clean_sheets" => Some(StatKind::CleanSheets),
            _ => None,
        }
    }
}

/// A player's season line together with the team it belongs to, if that team is known.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerCard<'s> {
    pub player: &'s PlayerStat,
    pub team: Option<&'s Team>,
}
