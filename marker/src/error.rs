//! Marker Error Types
//!
//! [`MarkerError`] covers everything that can go wrong while grading a
//! submission. Scoring itself cannot fail; the variants come from the shared
//! random source and from pluggable feedback strategies.
//!
//! # Example
//!
//! ```rust
//! use marker::error::MarkerError;
//!
//! fn check(subject: &str) -> Result<(), MarkerError> {
//!     if subject.is_empty() {
//!         return Err(MarkerError::Feedback("subject is empty".to_string()));
//!     }
//!     Ok(())
//! }
//! assert!(check("").is_err());
//! ```

/// Represents all error types that can occur in the marker system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    /// The shared random generator lock was poisoned by a panicking holder.
    #[error("random source unavailable")]
    RandomSourceUnavailable,
    /// A feedback strategy could not produce text.
    #[error("feedback generation failed: {0}")]
    Feedback(String),
}
