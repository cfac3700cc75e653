use crate::routes::common::{ok, service_error};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;
use services::student_service::StudentService;

/// GET /api/students/{student_id}/dashboard
///
/// The student's assignments with `completed`, `overdue` or `pending` status
/// as of today (UTC), their submissions, average and recommended resources.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` for an unknown student.
pub async fn dashboard(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    let today = Utc::now().date_naive();
    match StudentService::new(state.store()).dashboard(&student_id, today) {
        Ok(dashboard) => ok(dashboard, "Dashboard retrieved successfully"),
        Err(e) => service_error(e),
    }
}

/// GET /api/students/{student_id}/analytics
///
/// Rounded overall and per-subject averages, strongest and weakest subject,
/// and study tips.
pub async fn analytics(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    match StudentService::new(state.store()).analytics(&student_id) {
        Ok(analytics) => ok(analytics, "Analytics retrieved successfully"),
        Err(e) => service_error(e),
    }
}
