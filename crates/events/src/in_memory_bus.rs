//! In-memory event bus for tests/dev.

use std::sync::{Mutex, mpsc};

use async_trait::async_trait;

use crate::bus::{EventPublisher, PublishError, Subscription};
use crate::EventEnvelope;

/// In-memory pub/sub bus.
///
/// - No IO
/// - Best-effort fan-out
/// - Dead subscribers are dropped on the next publish
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    subscribers: Mutex<Vec<mpsc::Sender<EventEnvelope>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription<EventEnvelope> {
        let (tx, rx) = mpsc::channel();

        // If the lock is poisoned, we still return a subscription;
        // it just won't receive messages until the process restarts.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, envelope: EventEnvelope) -> Result<(), PublishError> {
        let mut subs = self.subscribers.lock().map_err(|_| PublishError::Poisoned)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(envelope.clone()).is_ok());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlogEvent, PostCreated, publish_best_effort};
    use quill_core::RecordId;
    use serde_json::json;

    #[tokio::test]
    async fn every_subscriber_gets_a_copy() {
        let bus = InMemoryEventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish(EventEnvelope::new("Anything", json!({ "k": 1 })))
            .await
            .unwrap();

        assert_eq!(a.drain().len(), 1);
        assert_eq!(b.drain().len(), 1);
    }

    #[tokio::test]
    async fn dropped_subscribers_do_not_fail_publish() {
        let bus = InMemoryEventBus::new();
        drop(bus.subscribe());
        let live = bus.subscribe();

        bus.publish(EventEnvelope::new("Anything", json!(null))).await.unwrap();
        assert_eq!(live.drain().len(), 1);
    }

    #[tokio::test]
    async fn best_effort_publish_encodes_typed_events() {
        let bus = InMemoryEventBus::new();
        let sub = bus.subscribe();
        let event = BlogEvent::PostCreated(PostCreated {
            id: RecordId::from("p1"),
            title: "Hello".to_string(),
        });

        assert!(publish_best_effort(&bus, &event).await);

        let got = sub.try_recv().unwrap();
        assert_eq!(got.event_type(), "PostCreated");
        assert_eq!(got.data(), &json!({ "id": "p1", "title": "Hello" }));
    }
}
