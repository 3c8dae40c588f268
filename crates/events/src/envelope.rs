use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Event, EventError};

/// Wire form of an event: a type tag and an opaque payload.
///
/// This is the unit the relay appends to its log and broadcasts. No schema,
/// no version, no ordering key. The tag is kept as whatever JSON the sender
/// put there, and any other top-level fields ride along untouched, so the
/// relay stores and forwards bodies as they arrived. Only a string tag can
/// match an event kind; anything else reads as an empty tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type", default)]
    tag: Value,

    #[serde(default)]
    data: Value,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl EventEnvelope {
    pub fn new(event_type: impl Into<String>, data: Value) -> Self {
        Self {
            tag: Value::String(event_type.into()),
            data,
            extra: Map::new(),
        }
    }

    /// Encode a typed event into its wire form.
    pub fn from_event<E: Event>(event: &E) -> Result<Self, EventError> {
        let data = event.data().map_err(|source| EventError::Encode {
            event_type: event.event_type(),
            source,
        })?;
        Ok(Self::new(event.event_type(), data))
    }

    pub fn event_type(&self) -> &str {
        self.tag.as_str().unwrap_or_default()
    }

    pub fn data(&self) -> &Value {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_is_type_and_data() {
        let env = EventEnvelope::new("PostCreated", json!({ "id": "p1", "title": "Hello" }));
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({ "type": "PostCreated", "data": { "id": "p1", "title": "Hello" } })
        );
    }

    #[test]
    fn missing_fields_are_tolerated() {
        let env: EventEnvelope = serde_json::from_value(json!({})).unwrap();
        assert_eq!(env.event_type(), "");
        assert_eq!(env.data(), &Value::Null);
        assert_eq!(env, EventEnvelope::default());
    }

    #[test]
    fn non_string_tag_and_extra_fields_survive_a_round_trip() {
        let body = json!({ "type": 7, "data": { "x": 1 }, "meta": { "k": 1 } });

        let env: EventEnvelope = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(env.event_type(), "");
        assert_eq!(serde_json::to_value(&env).unwrap(), body);
    }
}
