//! `POST /api/grade`: heuristic grading of one submission.
//!
//! This endpoint answers with its own body shape (`{score, feedback,
//! submittedAt}` or `{error}`) rather than the standard envelope.

use crate::state::AppState;
use axum::{Router, routing::post};

pub mod common;
pub mod post;

pub fn grade_routes() -> Router<AppState> {
    Router::new().route("/", post(post::grade_submission))
}
