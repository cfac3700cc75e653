#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, post_json, send, test_state};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn replies_by_keyword() {
        let (status, body) = send(
            make_test_app(test_state()),
            post_json(
                "/api/assistant",
                &json!({ "message": "Can you help me with my math homework?" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["topic"], "assignment");
        assert!(
            body["data"]["reply"]
                .as_str()
                .unwrap()
                .starts_with("I can help you understand your assignments.")
        );
    }

    #[tokio::test]
    async fn history_question_is_not_a_greeting() {
        let (_, body) = send(
            make_test_app(test_state()),
            post_json("/api/assistant", &json!({ "message": "Explain this history topic" })),
        )
        .await;
        assert_eq!(body["data"]["topic"], "history");
    }

    #[tokio::test]
    async fn blank_message_is_400() {
        for body in [json!({ "message": "   " }), json!({})] {
            let (status, json) =
                send(make_test_app(test_state()), post_json("/api/assistant", &body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["message"], "Message must not be empty");
        }
    }

    #[tokio::test]
    async fn greeting_names_the_student() {
        let (status, body) = send(
            make_test_app(test_state()),
            get("/api/assistant/greeting?name=Arjun"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"]["greeting"],
            "Namaste Arjun! I'm your AI assistant. How can I help you with your studies today?"
        );
    }
}
