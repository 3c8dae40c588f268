//! HTTP wiring for the comments service (Axum router + handlers).

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;

use quill_core::{Comment, RecordId};
use quill_events::EventEnvelope;
use quill_infra::{LenientJson, json_error};

use crate::CommentService;

#[derive(Debug, Default, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(service: Arc<CommentService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/posts/:id/comments", get(list_comments).post(create_comment))
        .route("/events", post(receive_event))
        .layer(Extension(service))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /posts/:id/comments`: the post's comments, `[]` when it has none.
pub async fn list_comments(
    Extension(service): Extension<Arc<CommentService>>,
    Path(post_id): Path<String>,
) -> Json<Vec<Comment>> {
    Json(service.list_for(&RecordId::from(post_id)))
}

/// `POST /posts/:id/comments`: 201 with the post's full comment list.
pub async fn create_comment(
    Extension(service): Extension<Arc<CommentService>>,
    Path(post_id): Path<String>,
    LenientJson(body): LenientJson<CreateCommentRequest>,
) -> axum::response::Response {
    match service.create(RecordId::from(post_id), body.content).await {
        Ok(comments) => (StatusCode::CREATED, Json(comments)).into_response(),
        Err(e) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable", e.to_string()),
    }
}

/// `POST /events`: always an empty success body.
pub async fn receive_event(
    Extension(service): Extension<Arc<CommentService>>,
    LenientJson(envelope): LenientJson<EventEnvelope>,
) -> impl IntoResponse {
    tracing::info!(event_type = envelope.event_type(), "event received");
    service.receive(&envelope).await;
    Json(json!({}))
}
