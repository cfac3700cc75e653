//! Helpers shared by the route groups.

use crate::response::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;
use services::ServiceError;
use validator::ValidationErrors;

/// Joins every field error message with `"; "`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// `200 OK` with the standard envelope.
pub fn ok<T: Serialize>(data: T, message: &str) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data, message))).into_response()
}

/// Error envelope with `null` data.
pub fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

pub fn service_error(err: ServiceError) -> Response {
    match err {
        ServiceError::StudentNotFound(id) => {
            tracing::info!(student_id = %id, "Student not found");
            error(StatusCode::NOT_FOUND, "Student not found")
        }
        ServiceError::EmptyMessage => error(StatusCode::BAD_REQUEST, "Message must not be empty"),
    }
}
