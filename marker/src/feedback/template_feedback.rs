//! # TemplateFeedback Strategy
//!
//! Implements [`Feedback`] with the fixed sentence bank in
//! [`bank`](super::bank). Output depends only on the score band and subject,
//! so it never fails and is fully deterministic.

use super::{generate_feedback, learning_recommendations};
use crate::error::MarkerError;
use crate::traits::feedback::Feedback;

/// Template-based feedback strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFeedback;

impl Feedback for TemplateFeedback {
    fn assemble_feedback(
        &self,
        text: &str,
        score: u32,
        subject: &str,
    ) -> Result<String, MarkerError> {
        Ok(generate_feedback(text, score, subject))
    }

    fn recommendations(&self, score: u32, subject: &str) -> Result<Vec<String>, MarkerError> {
        Ok(learning_recommendations(score, subject))
    }
}
