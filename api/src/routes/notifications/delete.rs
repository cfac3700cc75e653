use crate::routes::common::{error, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

/// DELETE /api/notifications/{toast_id}
///
/// ### Responses
/// - `200 OK` when the toast was live and is now dismissed.
/// - `404 Not Found` when it expired or never existed.
pub async fn dismiss_notification(
    State(state): State<AppState>,
    Path(toast_id): Path<String>,
) -> Response {
    if state.notifications().remove(&toast_id).await {
        ok(toast_id, "Notification dismissed")
    } else {
        error(StatusCode::NOT_FOUND, "Notification not found")
    }
}
