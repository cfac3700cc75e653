use crate::routes::common::{error, ok, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use services::teacher_service::TeacherService;
use util::notifications::ToastKind;

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/teacher/students/{student_id}/message
///
/// ### Request Body
/// ```json
/// { "message": "Great progress on the timeline!" }
/// ```
///
/// ### Responses
/// - `200 OK` with a receipt; a `success` toast `Message sent to <name>` is queued.
/// - `400 Bad Request` for an empty message or malformed body.
/// - `404 Not Found` for an unknown student.
pub async fn message_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return error(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    match TeacherService::new(state.store()).message_student(&student_id, &req.message) {
        Ok(receipt) => {
            state
                .notifications()
                .push(receipt.confirmation.clone(), ToastKind::Success)
                .await;
            ok(receipt, "Message sent successfully")
        }
        Err(e) => service_error(e),
    }
}
