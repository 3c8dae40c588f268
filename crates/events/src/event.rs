use serde_json::Value;

/// A domain event that can be put on the wire.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **named** by a stable type tag that consumers switch on
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "CommentCreated").
    fn event_type(&self) -> &'static str;

    /// The event payload as schema-free JSON.
    fn data(&self) -> Result<Value, serde_json::Error>;
}
