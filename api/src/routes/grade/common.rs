use crate::response::ErrorBody;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

pub const SUCCESS_TOAST: &str = "Assignment graded successfully!";
pub const FAILURE_TOAST: &str = "Failed to grade assignment. Please try again.";

/// Both fields are optional at the serde level so a missing field becomes a
/// validation failure instead of a body rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    #[validate(
        required(message = "content is required"),
        length(min = 1, message = "content must not be empty")
    )]
    pub content: Option<String>,

    #[validate(
        required(message = "assignmentId is required"),
        length(min = 1, message = "assignmentId must not be empty")
    )]
    pub assignment_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResponse {
    pub score: u32,
    pub feedback: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub submitted_at: String,
}

impl GradeResponse {
    pub fn new(score: u32, feedback: String, submitted_at: DateTime<Utc>) -> Self {
        Self {
            score,
            feedback,
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Terminal grading failures. Internal details are logged where they occur
/// and never sent to the client.
#[derive(Debug, Error)]
pub enum GradeError {
    #[error("Missing required fields")]
    MissingField,

    #[error("Assignment not found")]
    NotFound,

    #[error("Internal server error")]
    Internal(String),
}

impl GradeError {
    pub fn status(&self) -> StatusCode {
        match self {
            GradeError::MissingField => StatusCode::BAD_REQUEST,
            GradeError::NotFound => StatusCode::NOT_FOUND,
            GradeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GradeError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
