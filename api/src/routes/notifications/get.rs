use crate::routes::common::ok;
use crate::state::AppState;
use axum::{extract::State, response::Response};

/// GET /api/notifications
///
/// Live toasts, oldest first.
pub async fn list_notifications(State(state): State<AppState>) -> Response {
    ok(
        state.notifications().list().await,
        "Notifications retrieved successfully",
    )
}
