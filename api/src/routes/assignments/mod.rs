use crate::state::AppState;
use axum::{Router, routing::get};

pub mod get;

/// `/assignments` route group.
///
/// - `GET /assignments` → every assignment
/// - `GET /assignments/{assignment_id}` → one assignment
pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_assignments))
        .route("/{assignment_id}", get(get::get_assignment))
}
