use crate::response::ApiResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;
use util::config;

/// Builds the `/health` route group.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(health_check))
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
}

/// GET /health
///
/// Liveness probe.
///
/// ```json
/// {
///   "success": true,
///   "data": { "status": "ok", "service": "eduassist", "version": "0.1.0" },
///   "message": "Health check passed"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    let status = HealthStatus {
        status: "ok",
        service: config::project_name(),
        version: env!("CARGO_PKG_VERSION"),
    };
    Json(ApiResponse::success(status, "Health check passed"))
}
