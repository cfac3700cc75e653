use crate::routes::common::ok;
use crate::state::AppState;
use axum::{
    Router,
    extract::{Query, State},
    response::Response,
    routing::get,
};
use serde::Deserialize;

pub fn resource_routes() -> Router<AppState> {
    Router::new().route("/", get(list_resources))
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    pub subject: Option<String>,
}

/// GET /api/resources?subject=Science
///
/// Learning resources, optionally filtered by subject (case-insensitive).
/// An empty `subject` is treated as no filter.
pub async fn list_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceQuery>,
) -> Response {
    let subject = query.subject.as_deref().map(str::trim).filter(|s| !s.is_empty());
    ok(
        state.store().resources_for(subject),
        "Resources retrieved successfully",
    )
}
