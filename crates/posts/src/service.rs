use std::sync::Arc;

use thiserror::Error;

use quill_core::{Post, RecordId};
use quill_events::{
    BlogEvent, Dispatch, EventConsumer, EventEnvelope, EventKind, EventPublisher, PostCreated,
    publish_best_effort,
};
use quill_infra::{InMemoryStore, RecordStore, StoreError};

/// Fresh ids to draw before giving up on an insert.
const MAX_ID_ATTEMPTS: usize = 8;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("could not allocate a free post id after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The posts content service.
///
/// Store and publisher are injected so tests can run against their own
/// in-memory instances.
pub struct PostService {
    store: Arc<dyn RecordStore<RecordId, Post>>,
    publisher: Arc<dyn EventPublisher>,
}

impl PostService {
    pub fn new(
        store: Arc<dyn RecordStore<RecordId, Post>>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self { store, publisher }
    }

    /// Service backed by a fresh, empty in-memory store.
    pub fn in_memory(publisher: Arc<dyn EventPublisher>) -> Self {
        Self::new(Arc::new(InMemoryStore::<RecordId, Post>::new()), publisher)
    }

    pub fn list(&self) -> Vec<Post> {
        self.store.list()
    }

    pub fn get(&self, id: &RecordId) -> Option<Post> {
        self.store.get(id)
    }

    /// Store a new post, then announce it with `PostCreated`.
    ///
    /// The post is stored before the announcement is attempted and is
    /// returned whether or not the relay accepted it.
    pub async fn create(&self, title: String) -> Result<Post, ServiceError> {
        let post = self.insert_fresh(title)?;
        tracing::info!(post_id = %post.id, "post created");

        let event = BlogEvent::PostCreated(PostCreated::from(&post));
        publish_best_effort(self.publisher.as_ref(), &event).await;

        Ok(post)
    }

    /// Event-receiver entry point.
    pub async fn receive(&self, envelope: &EventEnvelope) -> Dispatch {
        quill_events::receive(self, self.publisher.as_ref(), envelope).await
    }

    fn insert_fresh(&self, title: String) -> Result<Post, ServiceError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let post = Post::new(RecordId::generate(), title.clone());
            if self.store.insert(post.id.clone(), post.clone())? {
                return Ok(post);
            }
            tracing::debug!(post_id = %post.id, "post id collision; drawing another");
        }
        Err(ServiceError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl EventConsumer for PostService {
    /// Posts reacts to nothing; it only announces.
    fn capabilities(&self) -> &'static [EventKind] {
        &[]
    }

    fn consume(&self, _event: BlogEvent) -> Vec<BlogEvent> {
        vec![]
    }
}
