use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student's textual answer to an assignment.
///
/// `score` and `feedback` are only present once the work has been graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub student_id: String,
    pub assignment_id: String,
    pub content: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
