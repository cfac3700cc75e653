use crate::routes::common::{error, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

/// GET /api/assignments
///
/// ### Responses
/// - `200 OK` with every assignment in dataset order.
pub async fn list_assignments(State(state): State<AppState>) -> Response {
    ok(state.store().assignments(), "Assignments retrieved successfully")
}

/// GET /api/assignments/{assignment_id}
///
/// ### Responses
/// - `200 OK` with the assignment.
/// - `404 Not Found` when the id is unknown.
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
) -> Response {
    match state.store().assignment(&assignment_id) {
        Some(assignment) => ok(assignment, "Assignment retrieved successfully"),
        None => error(StatusCode::NOT_FOUND, "Assignment not found"),
    }
}
