//! # Marker Library
//!
//! Heuristic grading of free-text assignment submissions.
//!
//! ## Key Concepts
//! - **Scorer**: random base plus length and keyword bonuses, see [`scorer`].
//! - **Feedback**: pluggable strategies turning a score into text, see
//!   [`traits::feedback::Feedback`] and [`feedback`].
//! - **GradingEngine**: owns the random source and a feedback strategy and
//!   grades one submission at a time, see [`engine`].
//! - **Grades**: letter grades and averages for dashboards, see [`grade`].

pub mod engine;
pub mod error;
pub mod feedback;
pub mod grade;
pub mod scorer;
pub mod traits;
pub mod types;

pub use engine::{GradeOutcome, GradingEngine};
pub use error::MarkerError;
pub use types::{ScoreBand, Subject};
