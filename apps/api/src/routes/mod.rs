pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::preview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/fields", get(handlers::handle_list_fields))
        .route("/api/v1/preview", post(handlers::handle_render_preview))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/events",
            post(handlers::handle_session_event),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::preview::session::SessionStore;

    fn test_router() -> Router {
        build_router(AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                progress_steps: 4,
                max_sessions: 8,
            },
            sessions: Arc::new(SessionStore::default()),
        })
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_fields_lists_registry() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/fields")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let fields = body["fields"].as_array().expect("fields array");
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0]["name"], "full_name");
        assert_eq!(fields[1]["contact_icon"], "fas fa-envelope");
    }

    #[tokio::test]
    async fn test_preview_renders_posted_state() {
        let request = json_request(
            "POST",
            "/api/v1/preview",
            json!({ "full_name": "Ada Lovelace", "skills": "Go, Rust ,  , C++" }),
        );
        let response = test_router().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let html = body["html"].as_str().expect("html string");
        assert!(html.contains("Ada Lovelace"));
        assert_eq!(html.matches("skill-badge").count(), 3);
        assert_eq!(body["progress"]["filled_fields"], 2);
        assert_eq!(body["progress"]["total_fields"], 12);
    }

    #[tokio::test]
    async fn test_preview_of_empty_body_is_empty_container() {
        let request = json_request("POST", "/api/v1/preview", json!({}));
        let response = test_router().oneshot(request).await.expect("response");
        let body = body_json(response).await;
        assert_eq!(body["html"], r#"<div class="resume-preview-content"></div>"#);
        assert_eq!(body["progress"]["percentage"], 0.0);
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(json_request("POST", "/api/v1/sessions", json!({})))
            .await
            .expect("create response");
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created["session_id"].as_str().expect("session id");

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/events"),
                json!({ "field": "email", "value": "ada@example.com" }),
            ))
            .await
            .expect("event response");
        assert_eq!(response.status(), StatusCode::OK);
        let rendered = body_json(response).await;
        assert!(rendered["html"]
            .as_str()
            .expect("html")
            .contains("ada@example.com"));

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/sessions/{id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("get response");
        assert_eq!(response.status(), StatusCode::OK);
        let snapshot = body_json(response).await;
        assert_eq!(snapshot["preview"]["progress"]["filled_fields"], 1);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/sessions/{id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("delete response");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/sessions/{id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("get after delete");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_field_event_is_rejected() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(json_request("POST", "/api/v1/sessions", json!({})))
            .await
            .expect("create response");
        let created = body_json(response).await;
        let id = created["session_id"].as_str().expect("session id");

        let response = router
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/events"),
                json!({ "field": "template_type", "value": "classic" }),
            ))
            .await
            .expect("event response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_event_on_missing_session_is_not_found() {
        let response = test_router()
            .oneshot(json_request(
                "POST",
                "/api/v1/sessions/00000000-0000-0000-0000-000000000000/events",
                json!({ "field": "email", "value": "x" }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
