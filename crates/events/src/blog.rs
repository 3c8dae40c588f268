//! The blog's event catalogue.
//!
//! Services publish and consume these typed variants; on the wire they travel
//! as `EventEnvelope { type, data }`. Payload fields missing on the wire decode
//! as empty values (no validation), matching how the services store input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quill_core::{Comment, CommentStatus, Post, RecordId};

use crate::{Event, EventEnvelope, EventError};

/// Type tags of every event a service understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    PostCreated,
    CommentCreated,
    CommentModerated,
    CommentUpdated,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::PostCreated,
        EventKind::CommentCreated,
        EventKind::CommentModerated,
        EventKind::CommentUpdated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PostCreated => "PostCreated",
            EventKind::CommentCreated => "CommentCreated",
            EventKind::CommentModerated => "CommentModerated",
            EventKind::CommentUpdated => "CommentUpdated",
        }
    }

    /// Look up a wire type tag. Unknown tags are `None`, not an error.
    pub fn from_type(event_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == event_type)
    }
}

impl core::fmt::Display for EventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `PostCreated`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostCreated {
    pub id: RecordId,
    pub title: String,
}

impl From<&Post> for PostCreated {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
        }
    }
}

/// Payload shared by every comment event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentPayload {
    pub id: RecordId,
    pub content: String,
    pub post_id: RecordId,
    pub status: CommentStatus,
}

impl CommentPayload {
    pub fn new(post_id: RecordId, comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            content: comment.content.clone(),
            post_id,
            status: comment.status,
        }
    }

    /// Same comment, different moderation status.
    pub fn with_status(mut self, status: CommentStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogEvent {
    PostCreated(PostCreated),
    CommentCreated(CommentPayload),
    CommentModerated(CommentPayload),
    CommentUpdated(CommentPayload),
}

impl BlogEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            BlogEvent::PostCreated(_) => EventKind::PostCreated,
            BlogEvent::CommentCreated(_) => EventKind::CommentCreated,
            BlogEvent::CommentModerated(_) => EventKind::CommentModerated,
            BlogEvent::CommentUpdated(_) => EventKind::CommentUpdated,
        }
    }

    /// Decode an envelope. `Ok(None)` means the type tag is not one we know.
    pub fn decode(envelope: &EventEnvelope) -> Result<Option<Self>, EventError> {
        match EventKind::from_type(envelope.event_type()) {
            Some(kind) => Self::decode_as(kind, envelope.data()).map(Some),
            None => Ok(None),
        }
    }

    /// Decode a payload whose kind is already known.
    pub fn decode_as(kind: EventKind, data: &Value) -> Result<Self, EventError> {
        // `{type}` with no `data` still means "all fields empty".
        let data = match data {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };
        let decode_err = |source| EventError::Decode {
            event_type: kind.as_str(),
            source,
        };

        let event = match kind {
            EventKind::PostCreated => {
                BlogEvent::PostCreated(serde_json::from_value(data).map_err(decode_err)?)
            }
            EventKind::CommentCreated => {
                BlogEvent::CommentCreated(serde_json::from_value(data).map_err(decode_err)?)
            }
            EventKind::CommentModerated => {
                BlogEvent::CommentModerated(serde_json::from_value(data).map_err(decode_err)?)
            }
            EventKind::CommentUpdated => {
                BlogEvent::CommentUpdated(serde_json::from_value(data).map_err(decode_err)?)
            }
        };
        Ok(event)
    }

    pub fn to_envelope(&self) -> Result<EventEnvelope, EventError> {
        EventEnvelope::from_event(self)
    }
}

impl Event for BlogEvent {
    fn event_type(&self) -> &'static str {
        self.kind().as_str()
    }

    fn data(&self) -> Result<Value, serde_json::Error> {
        match self {
            BlogEvent::PostCreated(p) => serde_json::to_value(p),
            BlogEvent::CommentCreated(c)
            | BlogEvent::CommentModerated(c)
            | BlogEvent::CommentUpdated(c) => serde_json::to_value(c),
        }
    }
}
