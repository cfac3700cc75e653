use crate::state::AppState;
use axum::{Router, routing::get};

pub mod get;

/// `/students` route group.
///
/// - `GET /students/{student_id}/dashboard`
/// - `GET /students/{student_id}/analytics`
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/{student_id}/dashboard", get(get::dashboard))
        .route("/{student_id}/analytics", get(get::analytics))
}
