//! Shared value types: subjects and score bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The subjects with dedicated feedback banks.
///
/// Any other subject string is graded with the generic bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Science,
    English,
    History,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::English,
        Subject::History,
    ];

    /// Case-insensitive match on the subject name. Unknown names give `None`.
    pub fn parse(name: &str) -> Option<Subject> {
        let name = name.trim();
        Subject::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::History => "History",
        }
    }

    /// Noun phrase used inside recommendation sentences.
    pub fn topic(self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Science => "science",
            Subject::English => "literary analysis",
            Subject::History => "history",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score-derived category that drives template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 4] = [
        ScoreBand::Excellent,
        ScoreBand::Good,
        ScoreBand::Average,
        ScoreBand::NeedsImprovement,
    ];

    /// ≥90 excellent, ≥80 good, ≥70 average, anything lower needs improvement.
    pub fn from_score(score: u32) -> ScoreBand {
        match score {
            90.. => ScoreBand::Excellent,
            80..=89 => ScoreBand::Good,
            70..=79 => ScoreBand::Average,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Average => "average",
            ScoreBand::NeedsImprovement => "needs improvement",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
