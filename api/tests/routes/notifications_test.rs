#[cfg(test)]
mod tests {
    use crate::helpers::{delete, get, make_test_app, post_json, send, test_state};
    use api::state::{AppState, Settings};
    use axum::http::StatusCode;
    use db::Store;
    use marker::GradingEngine;
    use serde_json::json;
    use std::time::Duration;
    use util::notifications::NotificationQueue;

    /// Lets the expiry task spawned by the queue run to completion.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn create_list_and_dismiss() {
        let state = test_state();

        let (status, body) = send(
            make_test_app(state.clone()),
            post_json("/api/notifications", &json!({ "message": "Saved", "type": "success" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["type"], "success");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (_, body) = send(make_test_app(state.clone()), get("/api/notifications")).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["message"], "Saved");

        let uri = format!("/api/notifications/{id}");
        let (status, _) = send(make_test_app(state.clone()), delete(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(make_test_app(state.clone()), delete(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert!(state.notifications().is_empty().await);
    }

    #[tokio::test]
    async fn type_defaults_to_info() {
        let (status, body) = send(
            make_test_app(test_state()),
            post_json("/api/notifications", &json!({ "message": "Heads up" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["type"], "info");
    }

    #[tokio::test]
    async fn invalid_notifications_are_400() {
        for body in [
            json!({ "message": "" }),
            json!({ "message": "x", "type": "warning" }),
        ] {
            let (status, _) = send(
                make_test_app(test_state()),
                post_json("/api/notifications", &body),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_expire_after_ttl() {
        let state = AppState::new(
            Store::seeded(),
            GradingEngine::new(Some(1)),
            NotificationQueue::new(Duration::from_millis(5000)),
            Settings::immediate(),
        );

        send(
            make_test_app(state.clone()),
            post_json("/api/notifications", &json!({ "message": "Soon gone" })),
        )
        .await;
        assert_eq!(state.notifications().len().await, 1);

        tokio::time::sleep(Duration::from_millis(4999)).await;
        settle().await;
        assert_eq!(state.notifications().len().await, 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        settle().await;
        let (_, body) = send(make_test_app(state.clone()), get("/api/notifications")).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }
}
