//! HTTP wiring for the posts service (Axum router + handlers).

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;

use quill_core::Post;
use quill_events::EventEnvelope;
use quill_infra::LenientJson;

use crate::{PostService, errors};

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(service: Arc<PostService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(list_posts).post(create_post))
        .route("/events", post(receive_event))
        .layer(Extension(service))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /posts`: every post, keyed by id.
pub async fn list_posts(Extension(service): Extension<Arc<PostService>>) -> Json<BTreeMap<String, Post>> {
    let posts = service
        .list()
        .into_iter()
        .map(|p| (p.id.to_string(), p))
        .collect();
    Json(posts)
}

/// `POST /posts`: 201 with the created post.
pub async fn create_post(
    Extension(service): Extension<Arc<PostService>>,
    LenientJson(body): LenientJson<CreatePostRequest>,
) -> axum::response::Response {
    match service.create(body.title).await {
        Ok(post) => (StatusCode::CREATED, Json(post)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// `POST /events`: always an empty success body.
pub async fn receive_event(
    Extension(service): Extension<Arc<PostService>>,
    LenientJson(envelope): LenientJson<EventEnvelope>,
) -> impl IntoResponse {
    tracing::info!(event_type = envelope.event_type(), "event received");
    service.receive(&envelope).await;
    Json(json!({}))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use quill_events::InMemoryEventBus;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        build_app(Arc::new(PostService::in_memory(Arc::new(InMemoryEventBus::new()))))
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_returns_201_with_generated_id() {
        let resp = app()
            .oneshot(
                Request::post("/posts")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"Hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body["title"], "Hello");
        assert_eq!(body["id"].as_str().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn missing_title_is_stored_empty() {
        let resp = app()
            .oneshot(
                Request::post("/posts")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await["title"], "");
    }

    #[tokio::test]
    async fn events_endpoint_always_answers_empty_object() {
        let resp = app()
            .oneshot(
                Request::post("/events")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"type":"SomethingElse","data":{}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({}));
    }

    #[tokio::test]
    async fn bodiless_requests_are_treated_as_empty_objects() {
        let app = app();

        let resp = app
            .clone()
            .oneshot(Request::post("/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await["title"], "");

        let resp = app
            .oneshot(Request::post("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({}));
    }
}
