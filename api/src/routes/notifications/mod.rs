//! `/notifications` route group: the live toast queue.
//!
//! Toasts disappear on their own after the configured TTL; `DELETE` dismisses
//! one early.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

pub mod delete;
pub mod get;
pub mod post;

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_notifications).post(post::create_notification))
        .route("/{toast_id}", delete(delete::dismiss_notification))
}
