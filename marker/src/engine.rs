//! Grading engine: one shared random source plus one feedback strategy.
//!
//! The engine is shared between request handlers behind an `Arc`. The random
//! generator sits in a `Mutex` that is held only for a single draw.

use crate::error::MarkerError;
use crate::feedback::template_feedback::TemplateFeedback;
use crate::scorer;
use crate::traits::feedback::Feedback;
use crate::types::ScoreBand;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Result of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeOutcome {
    pub score: u32,
    pub band: ScoreBand,
    pub feedback: String,
}

pub struct GradingEngine {
    rng: Mutex<StdRng>,
    feedback: Box<dyn Feedback + Send + Sync>,
    scored: AtomicU64,
}

impl GradingEngine {
    /// Creates an engine using [`TemplateFeedback`]. With a seed, the sequence
    /// of base scores is reproducible; without one it is seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            feedback: Box::new(TemplateFeedback),
            scored: AtomicU64::new(0),
        }
    }

    /// Replaces the feedback strategy.
    pub fn with_feedback<F>(mut self, strategy: F) -> Self
    where
        F: Feedback + Send + Sync + 'static,
    {
        self.feedback = Box::new(strategy);
        self
    }

    /// Scores `text` and builds feedback for `subject`.
    pub fn grade(&self, text: &str, subject: &str) -> Result<GradeOutcome, MarkerError> {
        let score = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| MarkerError::RandomSourceUnavailable)?;
            scorer::score_with_rng(text, &mut *rng)
        };
        self.scored.fetch_add(1, Ordering::Relaxed);

        let feedback = self.feedback.assemble_feedback(text, score, subject)?;
        if feedback.trim().is_empty() {
            return Err(MarkerError::Feedback(format!(
                "strategy returned empty feedback for subject '{subject}'"
            )));
        }

        tracing::debug!(score, subject, chars = text.chars().count(), "Submission graded");

        Ok(GradeOutcome {
            score,
            band: ScoreBand::from_score(score),
            feedback,
        })
    }

    pub fn recommendations(&self, score: u32, subject: &str) -> Result<Vec<String>, MarkerError> {
        let recs = self.feedback.recommendations(score, subject)?;
        if recs.is_empty() {
            return Err(MarkerError::Feedback(format!(
                "strategy returned no recommendations for subject '{subject}'"
            )));
        }
        Ok(recs)
    }

    /// Number of submissions scored since the engine was created.
    pub fn scored_total(&self) -> u64 {
        self.scored.load(Ordering::Relaxed)
    }
}
