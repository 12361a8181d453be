use crate::league::Fixture;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FixtureFilter {
    #[default]
    All,
    Played,
    Unplayed,
}

impl FixtureFilter {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(FixtureFilter::All),
            "played" => Some(FixtureFilter::Played),
            "unplayed" => Some(FixtureFilter::Unplayed),
            _ => None,
        }
    }

    /// Status only; scores are not consulted here.
    pub fn matches(&self, fixture: &Fixture) -> bool {
        match self {
            FixtureFilter::All => true,
            FixtureFilter::Played => fixture.status.is_played(),
            FixtureFilter::Unplayed => !fixture.status.is_played(),
        }
    }

    pub fn apply<'f>(&self, fixtures: &'f [Fixture]) -> Vec<&'f Fixture> {
        fixtures.iter().filter(|f| self.matches(f)).collect()
    }
}
