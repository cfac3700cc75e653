use crate::routes::common::ok;
use axum::{extract::Query, response::Response};
use serde::{Deserialize, Serialize};
use services::assistant_service;

#[derive(Debug, Default, Deserialize)]
pub struct GreetingQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}

/// GET /api/assistant/greeting?name=Arjun
///
/// ```json
/// {
///   "success": true,
///   "data": { "greeting": "Namaste Arjun! I'm your AI assistant. How can I help you with your studies today?" },
///   "message": "Greeting generated"
/// }
/// ```
pub async fn greeting(Query(query): Query<GreetingQuery>) -> Response {
    let greeting = assistant_service::greeting(query.name.as_deref().unwrap_or_default());
    ok(GreetingResponse { greeting }, "Greeting generated")
}
