//! Read-only services over the demo [`db::Store`].
//!
//! - [`teacher_service`]: class overview, roster, per-student detail, messages.
//! - [`student_service`]: student dashboard and personalized analytics.
//! - [`assistant_service`]: keyword-driven study assistant replies.

pub mod assistant_service;
pub mod error;
pub mod student_service;
pub mod teacher_service;

pub use error::ServiceError;
