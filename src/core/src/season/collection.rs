use crate::season::{SeasonData, SeasonId};
use crate::{compare_names, Team};
use std::collections::{BTreeMap, HashMap};
use std::collections::btree_map::Iter;

/// Season datasets keyed by season id, iterated in [`SeasonId`] order.
#[derive(Debug, Clone, Default)]
pub struct SeasonCollection {
    seasons: BTreeMap<SeasonId, SeasonData>,
}

impl SeasonCollection {
    pub fn new() -> Self {
        SeasonCollection::default()
    }

    pub fn insert(&mut self, id: SeasonId, season: SeasonData) {
        self.seasons.insert(id, season);
    }

    pub fn get(&self, id: &SeasonId) -> Option<&SeasonData> {
        self.seasons.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &SeasonId> {
        self.seasons.keys()
    }

    pub fn iter(&self) -> Iter<'_, SeasonId, SeasonData> {
        self.seasons.iter()
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    /// One team per distinct name across every season, sorted by [`compare_names`].
    /// When a name appears in several seasons the latest season's record is kept.
    pub fn unique_teams(&self) -> Vec<&Team> {
        let mut by_name: HashMap<&str, &Team> = HashMap::new();

        for season in self.seasons.values() {
            for team in season.teams() {
                by_name.insert(team.name.as_str(), team);
            }
        }

        let mut teams: Vec<&Team> = by_name.into_values().collect();
        teams.sort_by(|a, b| compare_names(&a.name, &b.name));
        teams
    }
}

impl FromIterator<(SeasonId, SeasonData)> for SeasonCollection {
    fn from_iter<I: IntoIterator<Item = (SeasonId, SeasonData)>>(iter: I) -> Self {
        SeasonCollection {
            seasons: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SeasonCollection {
    type Item = (&'a SeasonId, &'a SeasonData);
    type IntoIter = Iter<'a, SeasonId, SeasonData>;

    fn into_iter(self) -> Self::IntoIter {
        self.seasons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(teams: Vec<Team>) -> SeasonData {
        SeasonData::new(teams, Vec::new(), Vec::new())
    }

    #[test]
    fn test_iterates_in_season_order() {
        let seasons: SeasonCollection = vec![
            (SeasonId::new("3"), SeasonData::empty()),
            (SeasonId::new("1"), SeasonData::empty()),
            (SeasonId::new("2"), SeasonData::empty()),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = seasons.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_unique_teams_latest_season_wins() {
        let seasons: SeasonCollection = vec![
            (
                SeasonId::new("1"),
                season(vec![Team::new(1, "Rize").with_captain("Old"), Team::new(2, "Artvin")]),
            ),
            (
                SeasonId::new("2"),
                season(vec![Team::new(5, "Rize").with_captain("New"), Team::new(6, "Bolu")]),
            ),
        ]
        .into_iter()
        .collect();

        let teams = seasons.unique_teams();

        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Artvin", "Bolu", "Rize"]);
        assert_eq!(teams[2].captain.as_deref(), Some("New"));
    }

    #[test]
    fn test_unique_teams_sorted_ignoring_case_and_accents() {
        let seasons: SeasonCollection = vec![
            (SeasonId::new("1"), season(vec![Team::new(1, "Denizli"), Team::new(2, "Çaykur")])),
            (SeasonId::new("2"), season(vec![Team::new(3, "adana"), Team::new(4, "Bursa")])),
        ]
        .into_iter()
        .collect();

        let teams = seasons.unique_teams();

        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["adana", "Bursa", "Çaykur", "Denizli"]);
    }
}
