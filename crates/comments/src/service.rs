use std::sync::Arc;

use quill_core::{Comment, CommentStatus, RecordId};
use quill_events::{
    BlogEvent, CommentPayload, Dispatch, EventConsumer, EventEnvelope, EventKind, EventPublisher,
    publish_best_effort,
};
use quill_infra::{InMemoryStore, RecordStore, StoreError};

/// The comments content service.
///
/// Comments are stored per post id. The post id is never checked against the
/// posts service: commenting on an unknown post creates storage under that id.
pub struct CommentService {
    store: Arc<dyn RecordStore<RecordId, Vec<Comment>>>,
    publisher: Arc<dyn EventPublisher>,
}

impl CommentService {
    pub fn new(
        store: Arc<dyn RecordStore<RecordId, Vec<Comment>>>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self { store, publisher }
    }

    /// Service backed by a fresh, empty in-memory store.
    pub fn in_memory(publisher: Arc<dyn EventPublisher>) -> Self {
        Self::new(Arc::new(InMemoryStore::<RecordId, Vec<Comment>>::new()), publisher)
    }

    /// Comments of one post in submission order (empty for unknown posts).
    pub fn list_for(&self, post_id: &RecordId) -> Vec<Comment> {
        self.store.get(post_id).unwrap_or_default()
    }

    /// Store a pending comment, then announce it with `CommentCreated`.
    ///
    /// Returns the post's full comment list after the insert, whether or not
    /// the relay accepted the announcement. Nothing is announced when the
    /// store refused the write.
    pub async fn create(&self, post_id: RecordId, content: String) -> Result<Vec<Comment>, StoreError> {
        let mut comment = Comment::pending(RecordId::generate(), content);
        let mut comments = Vec::new();

        self.store
            .update_or_insert(post_id.clone(), Vec::new(), &mut |list| {
                while list.iter().any(|c| c.id == comment.id) {
                    comment.id = RecordId::generate();
                }
                list.push(comment.clone());
                comments = list.clone();
            })?;
        tracing::info!(post_id = %post_id, comment_id = %comment.id, "comment created");

        let event = BlogEvent::CommentCreated(CommentPayload::new(post_id, &comment));
        publish_best_effort(self.publisher.as_ref(), &event).await;

        Ok(comments)
    }

    /// Event-receiver entry point.
    pub async fn receive(&self, envelope: &EventEnvelope) -> Dispatch {
        quill_events::receive(self, self.publisher.as_ref(), envelope).await
    }

    /// Overwrite a comment's status. Returns the updated comment, or `None`
    /// when the post or comment is unknown.
    fn apply_status(&self, post_id: &RecordId, comment_id: &RecordId, status: CommentStatus) -> Option<Comment> {
        let mut updated = None;
        let result = self.store.update(post_id, &mut |list| {
            if let Some(c) = list.iter_mut().find(|c| &c.id == comment_id) {
                c.set_status(status);
                updated = Some(c.clone());
            }
        });
        if let Err(e) = result {
            tracing::warn!(post_id = %post_id, comment_id = %comment_id, error = %e, "status not applied");
        }
        updated
    }
}

impl EventConsumer for CommentService {
    fn capabilities(&self) -> &'static [EventKind] {
        &[EventKind::CommentModerated]
    }

    fn consume(&self, event: BlogEvent) -> Vec<BlogEvent> {
        let BlogEvent::CommentModerated(moderated) = event else {
            return vec![];
        };

        match self.apply_status(&moderated.post_id, &moderated.id, moderated.status) {
            Some(comment) => {
                tracing::info!(
                    post_id = %moderated.post_id,
                    comment_id = %comment.id,
                    status = %comment.status,
                    "comment moderated"
                );
                vec![BlogEvent::CommentUpdated(CommentPayload::new(
                    moderated.post_id,
                    &comment,
                ))]
            }
            None => {
                tracing::debug!(
                    post_id = %moderated.post_id,
                    comment_id = %moderated.id,
                    "moderation result for unknown comment"
                );
                vec![]
            }
        }
    }
}
