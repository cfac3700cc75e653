use serde::{Deserialize, Serialize};

/// A learner enrolled in the demo class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    /// School year, e.g. `"10th"`.
    pub grade: String,
    pub avatar_url: String,
}
