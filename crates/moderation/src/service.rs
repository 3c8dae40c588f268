use std::sync::Arc;

use quill_events::{BlogEvent, Dispatch, EventConsumer, EventEnvelope, EventKind, EventPublisher};

use crate::ModerationPolicy;

/// Reacts to `CommentCreated` with a `CommentModerated` decision.
///
/// Holds no records of its own: every decision is derived from the event.
pub struct ModerationService {
    policy: ModerationPolicy,
    publisher: Arc<dyn EventPublisher>,
}

impl ModerationService {
    pub fn new(policy: ModerationPolicy, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { policy, publisher }
    }

    /// Event-receiver entry point.
    pub async fn receive(&self, envelope: &EventEnvelope) -> Dispatch {
        quill_events::receive(self, self.publisher.as_ref(), envelope).await
    }
}

impl EventConsumer for ModerationService {
    fn capabilities(&self) -> &'static [EventKind] {
        &[EventKind::CommentCreated]
    }

    fn consume(&self, event: BlogEvent) -> Vec<BlogEvent> {
        let BlogEvent::CommentCreated(created) = event else {
            return vec![];
        };

        let status = self.policy.decide(&created.content);
        tracing::info!(
            post_id = %created.post_id,
            comment_id = %created.id,
            status = %status,
            "comment moderated"
        );
        vec![BlogEvent::CommentModerated(created.with_status(status))]
    }
}
