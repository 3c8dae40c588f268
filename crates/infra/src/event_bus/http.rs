//! HTTP event publisher.
//!
//! Delivers one envelope as `POST <base>/events`. Services use it to reach
//! the relay; the relay uses one per participant to broadcast. No retries and
//! no timeout beyond the client defaults.

use async_trait::async_trait;

use quill_events::{EventEnvelope, EventPublisher, PublishError};

#[derive(Debug, Clone)]
pub struct HttpEventPublisher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEventPublisher {
    /// Publisher for the event receiver of the service at `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Share one connection pool across several publishers.
    pub fn with_client(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        Self {
            client,
            endpoint: format!("{base}/events"),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EventPublisher for HttpEventPublisher {
    async fn publish(&self, envelope: EventEnvelope) -> Result<(), PublishError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(PublishError::Rejected(resp.status().as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Extension, Json, Router};
    use serde_json::json;

    use super::*;

    type Received = Arc<Mutex<Vec<EventEnvelope>>>;

    async fn collect(
        Extension(received): Extension<Received>,
        Json(env): Json<EventEnvelope>,
    ) -> StatusCode {
        received.lock().unwrap().push(env);
        StatusCode::OK
    }

    async fn spawn(router: Router) -> (String, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let p = HttpEventPublisher::new("http://localhost:4005/");
        assert_eq!(p.endpoint(), "http://localhost:4005/events");
    }

    #[tokio::test]
    async fn posts_envelope_to_events_endpoint() {
        let received: Received = Arc::default();
        let router = Router::new()
            .route("/events", post(collect))
            .layer(Extension(received.clone()));
        let (base, handle) = spawn(router).await;

        let publisher = HttpEventPublisher::new(&base);
        publisher
            .publish(EventEnvelope::new("PostCreated", json!({ "id": "p1", "title": "Hello" })))
            .await
            .unwrap();

        let got = received.lock().unwrap().clone();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].event_type(), "PostCreated");
        handle.abort();
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let router = Router::new().route("/events", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
        let (base, handle) = spawn(router).await;

        let err = HttpEventPublisher::new(&base)
            .publish(EventEnvelope::new("X", json!(null)))
            .await
            .unwrap_err();
        assert!(matches!(err, PublishError::Rejected(503)));
        handle.abort();
    }

    #[tokio::test]
    async fn unreachable_receiver_is_a_transport_error() {
        // Bind then drop to get a port nobody is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpEventPublisher::new(format!("http://{addr}"))
            .publish(EventEnvelope::new("X", json!(null)))
            .await
            .unwrap_err();
        assert!(matches!(err, PublishError::Transport(_)));
    }
}
