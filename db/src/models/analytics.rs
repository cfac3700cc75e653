use serde::{Deserialize, Serialize};

/// Class-wide average for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub subject: String,
    pub average_score: u32,
    pub submissions: u32,
}

/// One point of the monthly class progress series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProgress {
    pub month: String,
    pub score: u32,
}
