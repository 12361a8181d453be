use crate::league::Fixture;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CupStage {
    SemiFinal,
    ThirdPlace,
    Final,
}

impl CupStage {
    pub const ORDER: [CupStage; 3] = [CupStage::SemiFinal, CupStage::ThirdPlace, CupStage::Final];

    pub fn from_name(name: &str) -> Option<Self> {
        CupStage::ORDER.into_iter().find(|stage| stage.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CupStage::SemiFinal => "Yarı Final",
            CupStage::ThirdPlace => "3.'lük Maçı",
            CupStage::Final => "Final",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StageFixtures<'f> {
    pub stage: CupStage,
    pub fixtures: Vec<&'f Fixture>,
}

/// Knockout fixtures in bracket order. Fixtures of any other stage are left out.
pub fn group_by_stage(fixtures: &[Fixture]) -> Vec<StageFixtures<'_>> {
    CupStage::ORDER
        .into_iter()
        .filter_map(|stage| {
            let stage_fixtures: Vec<&Fixture> = fixtures
                .iter()
                .filter(|f| f.stage_name.as_deref().and_then(CupStage::from_name) == Some(stage))
                .collect();

            if stage_fixtures.is_empty() {
                None
            } else {
                Some(StageFixtures {
                    stage,
                    fixtures: stage_fixtures,
                })
            }
        })
        .collect()
}
