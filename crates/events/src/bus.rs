//! Event publishing abstraction (mechanics only).
//!
//! Publishing is **best effort**: the relay and the services treat every
//! outbound call as fire-and-forget.
//!
//! - **No retry**: a failed publish is logged by the caller and dropped
//! - **No ordering guarantees** across publishers or across receivers
//! - **No persistence**: the relay's log lives only as long as the process
//!
//! Consumers must therefore tolerate duplicates and gaps. The only mutation
//! consumers perform today (a status overwrite) is naturally idempotent.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::{Event, EventEnvelope, EventError};

/// Why a publish did not go through.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The event could not be put into wire form.
    #[error(transparent)]
    Encode(#[from] EventError),

    /// The receiver could not be reached (connect, timeout, IO).
    #[error("transport error: {0}")]
    Transport(String),

    /// The receiver answered with a non-success status.
    #[error("receiver rejected event with status {0}")]
    Rejected(u16),

    /// Publish failed due to internal lock poisoning.
    #[error("bus lock poisoned")]
    Poisoned,
}

/// A subscription to an in-process event stream.
///
/// Each subscription gets a copy of every event published to the bus
/// (broadcast semantics).
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain everything delivered so far without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Somewhere an event envelope can be sent.
///
/// Implemented by the HTTP client that talks to the relay (and that the
/// relay uses to reach participants) and by the in-memory bus used in tests.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, envelope: EventEnvelope) -> Result<(), PublishError>;
}

#[async_trait]
impl<P> EventPublisher for Arc<P>
where
    P: EventPublisher + ?Sized,
{
    async fn publish(&self, envelope: EventEnvelope) -> Result<(), PublishError> {
        (**self).publish(envelope).await
    }
}

/// Publish one typed event, logging and swallowing any failure.
///
/// Returns whether the publish went through. Callers never act on a `false`
/// beyond what is already logged here.
pub async fn publish_best_effort<E: Event>(publisher: &dyn EventPublisher, event: &E) -> bool {
    let envelope = match EventEnvelope::from_event(event) {
        Ok(env) => env,
        Err(e) => {
            tracing::warn!(event_type = event.event_type(), error = %e, "event encode failed");
            return false;
        }
    };

    match publisher.publish(envelope).await {
        Ok(()) => {
            tracing::debug!(event_type = event.event_type(), "event published");
            true
        }
        Err(e) => {
            tracing::warn!(event_type = event.event_type(), error = %e, "event publish failed; dropping");
            false
        }
    }
}
