#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, post_json, post_raw, send, state_with, test_state};
    use api::state::Settings;
    use axum::http::StatusCode;
    use chrono::DateTime;
    use marker::feedback::bank;
    use marker::traits::feedback::Feedback;
    use marker::{GradingEngine, MarkerError, ScoreBand, Subject};
    use serde_json::json;
    use std::time::Duration;
    use util::notifications::ToastKind;

    const SAMPLE: &str = "I solved the equation using the quadratic formula.";

    struct OfflineFeedback;

    impl Feedback for OfflineFeedback {
        fn assemble_feedback(&self, _: &str, _: u32, _: &str) -> Result<String, MarkerError> {
            Err(MarkerError::Feedback("feedback bank unavailable".into()))
        }

        fn recommendations(&self, _: u32, _: &str) -> Result<Vec<String>, MarkerError> {
            Err(MarkerError::Feedback("feedback bank unavailable".into()))
        }
    }

    #[tokio::test]
    async fn grades_sample_submission() {
        let state = test_state();
        let app = make_test_app(state.clone());

        let (status, body) = send(
            app,
            post_json("/api/grade", &json!({ "content": SAMPLE, "assignmentId": "a1" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let score = body["score"].as_u64().unwrap() as u32;
        assert!((60..=100).contains(&score));
        // Three keywords, so the score is at least base 60 plus 6.
        assert!(score >= 66);

        let band = ScoreBand::from_score(score);
        let expected = format!(
            "{} {}",
            bank::opener(band),
            bank::subject_sentence(Some(Subject::Mathematics), band)
        );
        assert_eq!(body["feedback"], expected);

        let submitted_at = body["submittedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(submitted_at).is_ok());
        assert_eq!(body.as_object().unwrap().len(), 3);

        let toasts = state.notifications().list().await;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Assignment graded successfully!");
        assert_eq!(toasts[0].kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn same_seed_gives_same_score() {
        let body = json!({ "content": SAMPLE, "assignmentId": "a2" });
        let (_, first) = send(make_test_app(test_state()), post_json("/api/grade", &body)).await;
        let (_, second) = send(make_test_app(test_state()), post_json("/api/grade", &body)).await;
        assert_eq!(first["score"], second["score"]);
        assert_eq!(first["feedback"], second["feedback"]);
    }

    #[tokio::test]
    async fn missing_content_is_rejected_before_scoring() {
        let state = test_state();
        let app = make_test_app(state.clone());

        let (status, body) =
            send(app, post_json("/api/grade", &json!({ "assignmentId": "a1" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required fields" }));
        assert_eq!(state.engine().scored_total(), 0);

        let toasts = state.notifications().list().await;
        assert_eq!(toasts[0].message, "Failed to grade assignment. Please try again.");
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn empty_or_malformed_fields_are_missing() {
        let cases = [
            json!({ "content": "", "assignmentId": "a1" }).to_string(),
            json!({ "content": "text", "assignmentId": "" }).to_string(),
            json!({ "content": 5, "assignmentId": "a1" }).to_string(),
            json!({ "content": "text" }).to_string(),
            json!([]).to_string(),
            "not json".to_string(),
        ];
        for body in cases {
            let state = test_state();
            let (status, json) =
                send(make_test_app(state.clone()), post_raw("/api/grade", body.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["error"], "Missing required fields");
            assert_eq!(state.engine().scored_total(), 0);
        }
    }

    #[tokio::test]
    async fn whitespace_content_is_graded() {
        let (status, body) = send(
            make_test_app(test_state()),
            post_json("/api/grade", &json!({ "content": "   ", "assignmentId": "a4" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let score = body["score"].as_u64().unwrap();
        assert!((60..=80).contains(&score));
    }

    #[tokio::test]
    async fn unknown_assignment_is_not_found() {
        let state = test_state();
        let (status, body) = send(
            make_test_app(state.clone()),
            post_json(
                "/api/grade",
                &json!({ "content": "x", "assignmentId": "does-not-exist" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Assignment not found" }));
        assert_eq!(state.engine().scored_total(), 0);
    }

    #[tokio::test]
    async fn strategy_failure_is_internal() {
        let engine = GradingEngine::new(Some(1)).with_feedback(OfflineFeedback);
        let state = state_with(engine, Settings::immediate());

        let (status, body) = send(
            make_test_app(state.clone()),
            post_json("/api/grade", &json!({ "content": SAMPLE, "assignmentId": "a1" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
        let toasts = state.notifications().list().await;
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn grading_waits_for_configured_delay() {
        let settings = Settings {
            grading_delay: Duration::from_secs(2),
            ..Settings::immediate()
        };
        let state = state_with(GradingEngine::new(Some(1)), settings);
        let app = make_test_app(state.clone());
        let started = tokio::time::Instant::now();

        let request = tokio::spawn(send(
            app,
            post_json("/api/grade", &json!({ "content": SAMPLE, "assignmentId": "a1" })),
        ));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!request.is_finished());
        assert_eq!(state.engine().scored_total(), 0);
        assert!(state.notifications().is_empty().await);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let (status, body) = request.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(body["score"].is_u64());
        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(state.engine().scored_total(), 1);
    }

    #[tokio::test]
    async fn slow_grading_times_out() {
        let settings = Settings {
            grading_delay: Duration::from_secs(5),
            grading_timeout: Duration::from_millis(20),
            ..Settings::immediate()
        };
        let state = state_with(GradingEngine::new(Some(1)), settings);

        let (status, body) = send(
            make_test_app(state.clone()),
            post_json("/api/grade", &json!({ "content": SAMPLE, "assignmentId": "a1" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(state.engine().scored_total(), 0);
    }
}
