use crate::routes::common::{error, ok, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use services::assistant_service;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/assistant
///
/// ### Request Body
/// ```json
/// { "message": "Can you help me with my math homework?" }
/// ```
///
/// ### Responses
/// - `200 OK` with `{ "topic": "assignment", "reply": "..." }` after the typing delay.
/// - `400 Bad Request` for a blank message or malformed body.
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return error(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    let reply = match assistant_service::reply(&req.message) {
        Ok(reply) => reply,
        Err(e) => return service_error(e),
    };

    tokio::time::sleep(state.settings().assistant_delay).await;
    ok(reply, "Reply generated")
}
