use thiserror::Error;

/// Failure to move an event between its typed and wire forms.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to encode {event_type} payload: {source}")]
    Encode {
        event_type: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode {event_type} payload: {source}")]
    Decode {
        event_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
