use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A gradable task definition.
///
/// `subject` selects the feedback bank used when a submission is graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub max_score: u32,
}

impl Assignment {
    /// `true` once `today` is strictly after the due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}
