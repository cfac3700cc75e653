use serde::{Deserialize, Serialize};

/// Study material suggested to students whose subject average falls in
/// `recommended_for` (inclusive on both ends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub subject: String,
    pub recommended_for: (u32, u32),
}

impl LearningResource {
    pub fn recommends(&self, average: f64) -> bool {
        let (min, max) = self.recommended_for;
        average >= f64::from(min) && average <= f64::from(max)
    }
}
