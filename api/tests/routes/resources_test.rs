#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, send, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn lists_all_resources() {
        let (status, body) = send(make_test_app(test_state()), get("/api/resources")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 4);
        assert_eq!(body["data"][0]["type"], "Video");
        assert_eq!(body["data"][0]["recommendedFor"], serde_json::json!([70, 85]));
    }

    #[tokio::test]
    async fn filters_by_subject_case_insensitively() {
        let (_, body) = send(
            make_test_app(test_state()),
            get("/api/resources?subject=history"),
        )
        .await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "r4");

        let (_, body) = send(make_test_app(test_state()), get("/api/resources?subject=Art")).await;
        assert!(body["data"].as_array().unwrap().is_empty());

        let (_, body) = send(make_test_app(test_state()), get("/api/resources?subject=")).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 4);
    }
}
