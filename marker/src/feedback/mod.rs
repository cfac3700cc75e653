//! # Feedback Strategies Module
//!
//! Feedback strategies implement [`Feedback`](crate::traits::feedback::Feedback).
//!
//! ## Available Strategies
//!
//! - [`template_feedback`]: Deterministic feedback from a fixed sentence bank,
//!   keyed by score band and subject.
//!
//! The free functions [`generate_feedback`] and [`learning_recommendations`]
//! expose the template logic directly for callers that need no strategy object.

pub mod bank;
pub mod template_feedback;

use crate::types::{ScoreBand, Subject};

/// Builds feedback for `score` in `subject`.
///
/// Only the score and subject matter; `_text` is accepted so the signature
/// matches strategies that do read the submission.
pub fn generate_feedback(_text: &str, score: u32, subject: &str) -> String {
    let band = ScoreBand::from_score(score);
    let subject = Subject::parse(subject);
    format!(
        "{} {}",
        bank::opener(band),
        bank::subject_sentence(subject, band)
    )
}

/// Band suggestions phrased for the subject, followed by one subject tip.
pub fn learning_recommendations(score: u32, subject: &str) -> Vec<String> {
    let band = ScoreBand::from_score(score);
    let subject = Subject::parse(subject);
    let topic = subject.map_or("this subject", Subject::topic);

    let mut out: Vec<String> = bank::band_suggestions(band)
        .iter()
        .map(|s| s.replace("{topic}", topic))
        .collect();
    if let Some(tip) = bank::study_tips(subject).first() {
        out.push((*tip).to_string());
    }
    out
}
