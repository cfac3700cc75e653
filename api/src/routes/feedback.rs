use crate::routes::common::{error, format_validation_errors, ok};
use crate::state::AppState;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
    routing::post,
};
use marker::ScoreBand;
use marker::grade::letter_grade;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/recommendations", post(recommendations))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(
        required(message = "score is required"),
        range(max = 100, message = "score must be between 0 and 100")
    )]
    pub score: Option<u32>,

    #[validate(
        required(message = "subject is required"),
        length(min = 1, message = "subject must not be empty")
    )]
    pub subject: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub score: u32,
    pub subject: String,
    pub band: ScoreBand,
    pub letter_grade: &'static str,
    pub recommendations: Vec<String>,
}

/// POST /api/feedback/recommendations
///
/// ### Request Body
/// ```json
/// { "score": 72, "subject": "History" }
/// ```
///
/// ### Responses
/// - `200 OK` with the score band, letter grade and recommendation list.
/// - `400 Bad Request` when a field is missing or the score exceeds 100.
/// - `500 Internal Server Error` if the feedback strategy fails.
pub async fn recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return error(StatusCode::BAD_REQUEST, "Invalid request body");
    };
    if let Err(errors) = req.validate() {
        return error(StatusCode::BAD_REQUEST, format_validation_errors(&errors));
    }
    let (Some(score), Some(subject)) = (req.score, req.subject) else {
        return error(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    match state.engine().recommendations(score, &subject) {
        Ok(recommendations) => ok(
            RecommendationResponse {
                score,
                band: ScoreBand::from_score(score),
                letter_grade: letter_grade(f64::from(score)),
                subject,
                recommendations,
            },
            "Recommendations generated successfully",
        ),
        Err(e) => {
            tracing::error!(error = %e, "Recommendation strategy failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
