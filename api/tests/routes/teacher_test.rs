#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, post_json, send, test_state};
    use axum::http::StatusCode;
    use serde_json::json;
    use util::notifications::ToastKind;

    #[tokio::test]
    async fn overview_reports_class_statistics() {
        let (status, body) = send(make_test_app(test_state()), get("/api/teacher/overview")).await;
        assert_eq!(status, StatusCode::OK);

        let data = &body["data"];
        assert_eq!(data["totalStudents"], 5);
        assert_eq!(data["totalSubmissions"], 5);
        assert_eq!(data["classAverage"], 83.6);
        assert_eq!(data["classLetterGrade"], "B");
        assert_eq!(data["highest"], json!({ "score": 92, "letterGrade": "A" }));
        assert_eq!(data["lowest"], json!({ "score": 75, "letterGrade": "C" }));
        assert_eq!(data["participationRate"], 100.0);
        assert_eq!(
            data["gradeDistribution"],
            json!({ "A": 1, "B": 2, "C": 2, "D": 0, "F": 0 })
        );
        assert_eq!(data["subjectPerformance"]["best"]["subject"], "English");
        assert_eq!(data["subjectPerformance"]["weakest"]["subject"], "Science");
        assert_eq!(data["progress"]["change"], 16);
        assert_eq!(data["recentSubmissions"][0]["studentName"], "Aisha Khan");
    }

    #[tokio::test]
    async fn roster_and_detail() {
        let (status, body) = send(make_test_app(test_state()), get("/api/teacher/students")).await;
        assert_eq!(status, StatusCode::OK);
        let roster = body["data"].as_array().unwrap();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0]["name"], "Arjun Sharma");
        assert_eq!(roster[0]["averageScore"], 85.0);

        let (status, body) =
            send(make_test_app(test_state()), get("/api/teacher/students/s5")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["student"]["name"], "Vikram Singh");
        assert_eq!(
            body["data"]["submissions"][0]["assignmentTitle"],
            "Quadratic Equations"
        );

        let (status, body) =
            send(make_test_app(test_state()), get("/api/teacher/students/s99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Student not found");
    }

    #[tokio::test]
    async fn message_student_queues_toast() {
        let state = test_state();
        let (status, body) = send(
            make_test_app(state.clone()),
            post_json(
                "/api/teacher/students/s2/message",
                &json!({ "message": "Well done on the essay" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["confirmation"], "Message sent to Priya Patel");

        let toasts = state.notifications().list().await;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Message sent to Priya Patel");
        assert_eq!(toasts[0].kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn message_validation() {
        let state = test_state();
        let (status, _) = send(
            make_test_app(state.clone()),
            post_json("/api/teacher/students/s2/message", &json!({ "message": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            make_test_app(state.clone()),
            post_json("/api/teacher/students/s0/message", &json!({ "message": "hi" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert!(state.notifications().is_empty().await);
    }
}
