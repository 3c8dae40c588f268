use crate::{BlogEvent, EventEnvelope, EventError, EventKind, EventPublisher, publish_best_effort};

/// A participant that reacts to events delivered by the relay.
///
/// Each consumer declares a **capability table**: the event kinds it handles.
/// Everything else is discarded before decoding, so a malformed event of a
/// kind the consumer never handles cannot produce an error.
pub trait EventConsumer: Send + Sync {
    /// Event kinds this consumer reacts to.
    fn capabilities(&self) -> &'static [EventKind];

    /// Apply a recognized event.
    ///
    /// Returns follow-up events to publish (possibly none). Must tolerate
    /// redelivery of the same event.
    fn consume(&self, event: BlogEvent) -> Vec<BlogEvent>;
}

/// Outcome of offering one envelope to a consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Unknown type tag, or a kind outside the consumer's capabilities.
    Ignored,
    /// The consumer applied the event and produced these follow-ups.
    Applied(Vec<BlogEvent>),
}

/// Route an envelope through a consumer's capability table.
pub fn dispatch<C>(consumer: &C, envelope: &EventEnvelope) -> Result<Dispatch, EventError>
where
    C: EventConsumer + ?Sized,
{
    let Some(kind) = EventKind::from_type(envelope.event_type()) else {
        return Ok(Dispatch::Ignored);
    };
    if !consumer.capabilities().contains(&kind) {
        return Ok(Dispatch::Ignored);
    }

    let event = BlogEvent::decode_as(kind, envelope.data())?;
    Ok(Dispatch::Applied(consumer.consume(event)))
}

/// Event-receiver entry point shared by every service.
///
/// Dispatches the envelope, then publishes any follow-ups best effort.
/// Decode failures are logged and treated as ignored: the sender is never
/// told anything went wrong.
pub async fn receive<C>(consumer: &C, publisher: &dyn EventPublisher, envelope: &EventEnvelope) -> Dispatch
where
    C: EventConsumer + ?Sized,
{
    match dispatch(consumer, envelope) {
        Ok(Dispatch::Ignored) => {
            tracing::debug!(event_type = envelope.event_type(), "event ignored");
            Dispatch::Ignored
        }
        Ok(Dispatch::Applied(follow_ups)) => {
            tracing::info!(
                event_type = envelope.event_type(),
                follow_ups = follow_ups.len(),
                "event applied"
            );
            for event in &follow_ups {
                publish_best_effort(publisher, event).await;
            }
            Dispatch::Applied(follow_ups)
        }
        Err(e) => {
            tracing::warn!(event_type = envelope.event_type(), error = %e, "event rejected");
            Dispatch::Ignored
        }
    }
}
