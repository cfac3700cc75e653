use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod get;
pub mod post;

/// `/assistant` route group.
///
/// - `POST /assistant` → canned reply to a study question
/// - `GET /assistant/greeting?name=` → opening line
pub fn assistant_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(post::ask))
        .route("/greeting", get(get::greeting))
}
