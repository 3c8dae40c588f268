//! Log-then-broadcast fan-out.
//!
//! Each published event is appended to the log, then handed to one detached
//! task per participant. Deliveries are independent and fire-and-forget:
//!
//! - a failed delivery is logged and dropped (no retry, no queue)
//! - the publisher never learns about delivery failures
//! - participants may observe events in different orders

use std::sync::Arc;

use tokio::task::JoinHandle;

use quill_events::{EventEnvelope, EventPublisher};
use quill_infra::{HttpEventPublisher, RelayConfig};

use crate::{EventLog, LogError};

/// A broadcast target.
#[derive(Clone)]
pub struct Participant {
    name: String,
    publisher: Arc<dyn EventPublisher>,
}

impl Participant {
    pub fn new(name: impl Into<String>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            name: name.into(),
            publisher,
        }
    }

    /// Participant reached over HTTP at `base_url`.
    pub fn http(client: reqwest::Client, base_url: &str) -> Self {
        Self::new(base_url, Arc::new(HttpEventPublisher::with_client(client, base_url)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Debug for Participant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Participant").field("name", &self.name).finish()
    }
}

/// Result of accepting one event.
#[derive(Debug)]
pub struct Broadcast {
    /// Position of the event in the log.
    pub sequence: u64,
    /// One detached delivery per participant. Dropping these does not cancel
    /// anything; tests await them to observe completion.
    pub deliveries: Vec<JoinHandle<()>>,
}

#[derive(Debug)]
pub struct Relay {
    log: EventLog,
    participants: Vec<Participant>,
}

impl Relay {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self {
            log: EventLog::new(),
            participants,
        }
    }

    /// Relay broadcasting over HTTP to every configured participant.
    pub fn from_config(config: &RelayConfig) -> Self {
        let client = reqwest::Client::new();
        let participants = config
            .participants
            .iter()
            .map(|url| Participant::http(client.clone(), url))
            .collect();
        Self::new(participants)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Append the event, then broadcast it to every participant.
    ///
    /// Must be called from within a tokio runtime.
    pub fn publish(&self, envelope: EventEnvelope) -> Result<Broadcast, LogError> {
        let sequence = self.log.append(envelope.clone())?;
        tracing::info!(
            event_type = envelope.event_type(),
            sequence,
            participants = self.participants.len(),
            "event accepted"
        );

        let deliveries = self
            .participants
            .iter()
            .map(|participant| {
                let participant = participant.clone();
                let envelope = envelope.clone();
                tokio::spawn(async move { deliver(participant, envelope).await })
            })
            .collect();

        Ok(Broadcast {
            sequence,
            deliveries,
        })
    }

    /// Every event received so far, unfiltered.
    pub fn history(&self) -> Result<Vec<EventEnvelope>, LogError> {
        self.log.history()
    }
}

async fn deliver(participant: Participant, envelope: EventEnvelope) {
    let event_type = envelope.event_type().to_string();
    match participant.publisher.publish(envelope).await {
        Ok(()) => tracing::debug!(participant = participant.name(), %event_type, "event delivered"),
        Err(e) => tracing::warn!(
            participant = participant.name(),
            %event_type,
            error = %e,
            "event delivery failed; dropping"
        ),
    }
}
