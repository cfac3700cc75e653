//! `/teacher` route group: class dashboard for the teacher view.
//!
//! - `GET /teacher/overview`
//! - `GET /teacher/students`
//! - `GET /teacher/students/{student_id}`
//! - `POST /teacher/students/{student_id}/message`

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod get;
pub mod post;

pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get::overview))
        .route("/students", get(get::roster))
        .route("/students/{student_id}", get(get::student_detail))
        .route("/students/{student_id}/message", post(post::message_student))
}
