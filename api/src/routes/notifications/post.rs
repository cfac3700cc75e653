use crate::routes::common::{error, format_validation_errors};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use util::notifications::ToastKind;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,

    #[serde(rename = "type", default)]
    pub kind: ToastKind,
}

/// POST /api/notifications
///
/// ### Request Body
/// ```json
/// { "message": "Saved", "type": "success" }
/// ```
/// `type` is one of `success`, `error`, `info` and defaults to `info`.
///
/// ### Responses
/// - `201 Created` with the queued toast.
/// - `400 Bad Request` for an empty message or unknown type.
pub async fn create_notification(
    State(state): State<AppState>,
    payload: Result<Json<CreateNotificationRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return error(StatusCode::BAD_REQUEST, "Invalid request body");
    };
    if let Err(errors) = req.validate() {
        return error(StatusCode::BAD_REQUEST, format_validation_errors(&errors));
    }

    let toast = state.notifications().push(req.message, req.kind).await;
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(toast, "Notification queued")),
    )
        .into_response()
}
