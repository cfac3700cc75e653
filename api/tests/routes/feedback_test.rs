#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, post_json, send, test_state};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn recommendations_for_score_and_subject() {
        let (status, body) = send(
            make_test_app(test_state()),
            post_json(
                "/api/feedback/recommendations",
                &json!({ "score": 72, "subject": "History" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["band"], "average");
        assert_eq!(data["letterGrade"], "C");
        let recs = data["recommendations"].as_array().unwrap();
        assert!(!recs.is_empty());
        assert_eq!(recs[0], "Revisit the core concepts of history");
        assert_eq!(
            recs.last().unwrap(),
            "Create timelines to understand chronological relationships"
        );
    }

    #[tokio::test]
    async fn unknown_subject_still_recommends() {
        for score in [0, 59, 75, 85, 100] {
            let (status, body) = send(
                make_test_app(test_state()),
                post_json(
                    "/api/feedback/recommendations",
                    &json!({ "score": score, "subject": "Art" }),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert!(!body["data"]["recommendations"].as_array().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn invalid_input_is_400() {
        let cases = [
            json!({ "score": 101, "subject": "Science" }),
            json!({ "subject": "Science" }),
            json!({ "score": 80 }),
            json!({ "score": -1, "subject": "Science" }),
        ];
        for body in cases {
            let (status, json) = send(
                make_test_app(test_state()),
                post_json("/api/feedback/recommendations", &body),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["success"], false);
        }
    }
}
