use crate::league::Fixture;
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WeekFixtures<'f> {
    /// `None` collects fixtures without a week number.
    pub week: Option<u32>,
    pub fixtures: Vec<&'f Fixture>,
}

/// Groups fixtures by week in numeric order. Fixtures without a week form the last group.
pub fn group_by_week<'f>(fixtures: &[&'f Fixture]) -> Vec<WeekFixtures<'f>> {
    let mut weeks = Vec::new();

    for (week, group) in &fixtures
        .iter()
        .copied()
        .sorted_by_key(|f| (f.week.is_none(), f.week))
        .chunk_by(|f| f.week)
    {
        weeks.push(WeekFixtures {
            week,
            fixtures: group.collect(),
        });
    }

    weeks
}
