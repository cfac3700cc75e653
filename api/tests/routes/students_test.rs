#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, send, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn dashboard_for_student() {
        let (status, body) =
            send(make_test_app(test_state()), get("/api/students/s1/dashboard")).await;
        assert_eq!(status, StatusCode::OK);

        let data = &body["data"];
        assert_eq!(data["student"]["name"], "Arjun Sharma");
        let assignments = data["assignments"].as_array().unwrap();
        assert_eq!(assignments.len(), 4);
        assert_eq!(assignments[0]["status"], "completed");
        assert_eq!(assignments[0]["score"], 85);
        // The demo due dates are all in the past.
        for a in &assignments[1..] {
            assert_eq!(a["status"], "overdue");
            assert!(a["score"].is_null());
        }
        assert_eq!(data["averageScore"], 85.0);
        assert_eq!(data["letterGrade"], "B");
        assert_eq!(data["recommendedResources"][0]["id"], "r1");
    }

    #[tokio::test]
    async fn analytics_for_student() {
        let (status, body) =
            send(make_test_app(test_state()), get("/api/students/s4/analytics")).await;
        assert_eq!(status, StatusCode::OK);

        let data = &body["data"];
        assert_eq!(data["overallAverage"], 88);
        assert_eq!(data["subjectAverages"][0]["subject"], "History");
        assert_eq!(data["strongestSubject"]["subject"], "History");
        assert_eq!(data["generalTips"].as_array().unwrap().len(), 4);
        assert_eq!(data["subjectTips"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn unknown_student_is_404() {
        for uri in ["/api/students/x/dashboard", "/api/students/x/analytics"] {
            let (status, body) = send(make_test_app(test_state()), get(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["success"], false);
        }
    }
}
