//! HTTP wiring for the moderation service.

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use quill_events::EventEnvelope;
use quill_infra::LenientJson;

use crate::ModerationService;

pub fn build_app(service: Arc<ModerationService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", post(receive_event))
        .layer(Extension(service))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `POST /events`: always an empty success body.
pub async fn receive_event(
    Extension(service): Extension<Arc<ModerationService>>,
    LenientJson(envelope): LenientJson<EventEnvelope>,
) -> impl IntoResponse {
    tracing::info!(event_type = envelope.event_type(), "event received");
    service.receive(&envelope).await;
    Json(json!({}))
}
