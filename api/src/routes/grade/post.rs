use super::common::{FAILURE_TOAST, GradeError, GradeRequest, GradeResponse, SUCCESS_TOAST};
use crate::routes::common::format_validation_errors;
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use marker::GradeOutcome;
use std::sync::Arc;
use tokio_util::task::AbortOnDropHandle;
use tracing::{error, info, warn};
use util::notifications::ToastKind;
use validator::Validate;

/// POST /api/grade
///
/// Scores a text submission against an assignment and returns feedback.
///
/// ### Request Body
/// ```json
/// { "content": "I solved the equation using the quadratic formula.", "assignmentId": "a1" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "score": 78, "feedback": "Average effort. ...", "submittedAt": "2024-03-01T10:00:00.000Z" }
/// ```
/// - `400 Bad Request` `{ "error": "Missing required fields" }`
/// - `404 Not Found` `{ "error": "Assignment not found" }`
/// - `500 Internal Server Error` `{ "error": "Internal server error" }`
///
/// Every outcome queues a toast: success on 200, error otherwise.
pub async fn grade_submission(
    State(state): State<AppState>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<Json<GradeResponse>, GradeError> {
    let result = grade(&state, payload).await;

    let (message, kind) = match &result {
        Ok(_) => (SUCCESS_TOAST, ToastKind::Success),
        Err(_) => (FAILURE_TOAST, ToastKind::Error),
    };
    state.notifications().push(message, kind).await;

    result.map(Json)
}

async fn grade(
    state: &AppState,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<GradeResponse, GradeError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected grade request body");
        GradeError::MissingField
    })?;

    if let Err(errors) = req.validate() {
        warn!(errors = %format_validation_errors(&errors), "Invalid grade request");
        return Err(GradeError::MissingField);
    }
    let (Some(content), Some(assignment_id)) = (req.content, req.assignment_id) else {
        return Err(GradeError::MissingField);
    };

    let Some(assignment) = state.store().assignment(&assignment_id) else {
        info!(assignment_id = %assignment_id, "Grade requested for unknown assignment");
        return Err(GradeError::NotFound);
    };
    let subject = assignment.subject.clone();

    let outcome = run_grading(state, content, subject).await?;

    info!(
        assignment_id = %assignment_id,
        score = outcome.score,
        band = ?outcome.band,
        "Graded submission"
    );

    Ok(GradeResponse::new(outcome.score, outcome.feedback, Utc::now()))
}

/// Runs the delay and the engine on a separate task, bounded by the grading
/// timeout. The task is aborted if the request is dropped or times out.
async fn run_grading(
    state: &AppState,
    content: String,
    subject: String,
) -> Result<GradeOutcome, GradeError> {
    let settings = state.settings();
    let engine = Arc::clone(state.engine());

    let task = AbortOnDropHandle::new(tokio::spawn(async move {
        tokio::time::sleep(settings.grading_delay).await;
        engine.grade(&content, &subject)
    }));

    match tokio::time::timeout(settings.grading_timeout, task).await {
        Ok(Ok(Ok(outcome))) => Ok(outcome),
        Ok(Ok(Err(e))) => {
            error!(error = %e, "Grading engine failed");
            Err(GradeError::Internal(e.to_string()))
        }
        Ok(Err(join_error)) => {
            error!(error = %join_error, "Grading task did not complete");
            Err(GradeError::Internal(join_error.to_string()))
        }
        Err(_) => {
            error!(
                timeout_ms = settings.grading_timeout.as_millis() as u64,
                "Grading timed out"
            );
            Err(GradeError::Internal("grading timed out".into()))
        }
    }
}
