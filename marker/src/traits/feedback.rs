//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait, used to implement pluggable
//! feedback strategies for the marker system.
//!
//! A strategy turns an already computed score into student-facing text and a
//! list of follow-up recommendations. Strategies must accept any subject
//! string; unknown subjects are expected to fall back to generic wording
//! rather than fail.

use crate::error::MarkerError;

/// A trait for pluggable feedback strategies in the marker system.
///
/// # Arguments
/// - `text`: The submitted work.
/// - `score`: The score already assigned to it.
/// - `subject`: The subject of the assignment being answered.
///
/// # Returns
/// - `Ok(String)`: Non-empty feedback.
/// - `Err(MarkerError)`: If the strategy cannot produce feedback.
pub trait Feedback {
    fn assemble_feedback(&self, text: &str, score: u32, subject: &str)
    -> Result<String, MarkerError>;

    /// Follow-up suggestions for a score in a subject. Never empty on success.
    fn recommendations(&self, score: u32, subject: &str) -> Result<Vec<String>, MarkerError>;
}
