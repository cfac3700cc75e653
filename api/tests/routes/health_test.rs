#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, send, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_check_is_ok() {
        let (status, body) = send(make_test_app(test_state()), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = make_test_app(test_state());
        let response = tower::ServiceExt::oneshot(app, get("/api/nothing-here"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
