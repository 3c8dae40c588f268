//! HTTP wiring for the relay.

use std::sync::Arc;

use axum::{Extension, Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;

use quill_events::EventEnvelope;
use quill_infra::LenientJson;

use crate::{Relay, errors};

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(relay: Arc<Relay>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(history).post(publish))
        .layer(Extension(relay))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `POST /events`: append and broadcast. Answers before any delivery
/// completes.
pub async fn publish(
    Extension(relay): Extension<Arc<Relay>>,
    LenientJson(envelope): LenientJson<EventEnvelope>,
) -> axum::response::Response {
    match relay.publish(envelope) {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "OK" }))).into_response(),
        Err(e) => errors::log_error_to_response(e),
    }
}

/// `GET /events`: the full log.
pub async fn history(Extension(relay): Extension<Arc<Relay>>) -> axum::response::Response {
    match relay.history() {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => errors::log_error_to_response(e),
    }
}
