use serde::Serialize;

/// How far a planning session has progressed.
///
/// Only [`PlannerStage::Ready`] allows an itinerary request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannerStage {
    Empty,
    CityOnly,
    Ready,
}

impl PlannerStage {
    pub fn from_parts(has_city: bool, has_interests: bool) -> Self {
        match (has_city, has_interests) {
            (false, _) => PlannerStage::Empty,
            (true, false) => PlannerStage::CityOnly,
            (true, true) => PlannerStage::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PlannerStage::Ready)
    }
}
