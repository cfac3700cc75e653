//!
//! Traits Module
//!
//! Core extension points of the marker system.
//!
//! - [`feedback`]: Pluggable feedback strategies used when grading a submission.

pub mod feedback;
