//! HTTP layer of the EduAssist backend.
//!
//! [`app`] assembles the full router: every endpoint under `/api`, request
//! logging and a permissive CORS policy for the browser frontend.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::header::CONTENT_TYPE,
    middleware::from_fn,
};
use tower_http::cors::CorsLayer;

use crate::middleware::log_request;
use crate::routes::routes;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes(state))
        .layer(from_fn(log_request))
        .layer(cors)
}
