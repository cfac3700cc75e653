#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, send, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn lists_assignments() {
        let (status, body) = send(make_test_app(test_state()), get("/api/assignments")).await;
        assert_eq!(status, StatusCode::OK);
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["id"], "a1");
        assert_eq!(items[0]["dueDate"], "2023-05-15");
        assert_eq!(items[3]["subject"], "History");
    }

    #[tokio::test]
    async fn gets_one_assignment() {
        let (status, body) = send(make_test_app(test_state()), get("/api/assignments/a3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Literary Analysis");
    }

    #[tokio::test]
    async fn unknown_assignment_is_404() {
        let (status, body) = send(make_test_app(test_state()), get("/api/assignments/a9")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Assignment not found");
    }
}
