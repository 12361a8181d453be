use crate::LoadError;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Collections are read entry by entry: a malformed entry is logged and dropped,
/// the rest of the season survives.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonEntity {
    #[serde(default, deserialize_with = "skip_malformed_entries")]
    pub teams: Option<Vec<TeamEntity>>,
    #[serde(default, deserialize_with = "skip_malformed_entries")]
    pub fixtures: Option<Vec<FixtureEntity>>,
    #[serde(default, deserialize_with = "skip_malformed_entries")]
    pub player_stats: Option<Vec<PlayerStatEntity>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub logo: Option<String>,
    pub captain: Option<String>,
    #[serde(default)]
    pub players: Vec<String>,
    pub budget: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureEntity {
    pub home_team_id: u32,
    pub away_team_id: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "count_or_none")]
    pub home_score: Option<u32>,
    #[serde(default, deserialize_with = "count_or_none")]
    pub away_score: Option<u32>,
    #[serde(default, deserialize_with = "count_or_none")]
    pub week: Option<u32>,
    pub date: Option<String>,
    pub stage_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatEntity {
    pub name: String,
    pub team_id: Option<u32>,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    pub suspension: Option<SuspensionEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspensionEntity {
    pub reason: String,
    pub banned_week: u32,
}

fn skip_malformed_entries<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries: Option<Vec<Value>> = Option::deserialize(deserializer)?;

    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(idx, entry)| match serde_json::from_value(entry) {
                Ok(parsed) => Some(parsed),
                Err(error) => {
                    warn!("skip malformed entry #{}: {}", idx, error);
                    None
                }
            })
            .collect()
    }))
}

/// Non-negative integers only; negative, fractional or non-numeric values read as absent.
fn count_or_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let count = value.as_u64().and_then(|v| u32::try_from(v).ok());
    if count.is_none() && !value.is_null() {
        warn!("ignore invalid count: {}", value);
    }

    Ok(count)
}

pub struct SeasonLoader;

impl SeasonLoader {
    pub fn parse(path: &str, json: &str) -> Result<SeasonEntity, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            path: String::from(path),
            source,
        })
    }
}
