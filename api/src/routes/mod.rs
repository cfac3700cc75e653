//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness
//! - `/grade` → heuristic grading of a submission
//! - `/assignments`, `/resources` → dataset lookups
//! - `/feedback` → recommendations for a score
//! - `/teacher` → class dashboard
//! - `/students` → per-student dashboard and analytics
//! - `/assistant` → study assistant
//! - `/notifications` → toast queue

use crate::routes::{
    assignments::assignment_routes, assistant::assistant_routes, feedback::feedback_routes,
    grade::grade_routes, health::health_routes, notifications::notification_routes,
    resources::resource_routes, students::student_routes, teacher::teacher_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod assignments;
pub mod assistant;
pub mod common;
pub mod feedback;
pub mod grade;
pub mod health;
pub mod notifications;
pub mod resources;
pub mod students;
pub mod teacher;

/// Builds every `/api` route with `app_state` applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/grade", grade_routes())
        .nest("/assignments", assignment_routes())
        .nest("/resources", resource_routes())
        .nest("/feedback", feedback_routes())
        .nest("/teacher", teacher_routes())
        .nest("/students", student_routes())
        .nest("/assistant", assistant_routes())
        .nest("/notifications", notification_routes())
        .with_state(app_state)
}
