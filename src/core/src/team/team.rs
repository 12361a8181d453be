use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub logo: Option<String>,
    pub captain: Option<String>,
    pub players: Vec<String>,
    pub budget: Option<f64>,
}

impl Team {
    pub fn new(id: u32, name: &str) -> Self {
        Team {
            id,
            name: String::from(name),
            logo: None,
            captain: None,
            players: Vec::new(),
            budget: None,
        }
    }

    pub fn with_captain(mut self, captain: &str) -> Self {
        self.captain = Some(String::from(captain));
        self
    }

    pub fn with_logo(mut self, logo: &str) -> Self {
        self.logo = Some(String::from(logo));
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_players(mut self, players: Vec<String>) -> Self {
        self.players = players;
        self
    }
}

/// Resolves a season-local team id. Ids are only unique inside one season.
pub fn team_by_id(teams: &[Team], id: u32) -> Option<&Team> {
    teams.iter().find(|t| t.id == id)
}

pub fn team_by_name<'t>(teams: &'t [Team], name: &str) -> Option<&'t Team> {
    teams.iter().find(|t| t.name == name)
}

/// Case-insensitive substring search on team names. An empty query matches every team.
pub fn search_teams<'t>(teams: &'t [Team], query: &str) -> Vec<&'t Team> {
    let query = query.to_lowercase();

    teams
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&query))
        .collect()
}
