//! Events exchanged between the blog services.
//!
//! - `envelope`: the schema-free `{type, data}` wire form the relay stores
//! - `blog`: the closed set of typed events services understand
//! - `bus`: publishing abstraction (mechanics only, no transport)
//! - `handler`: capability-based dispatch for consumers

pub mod blog;
pub mod bus;
pub mod envelope;
pub mod error;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use blog::{BlogEvent, CommentPayload, EventKind, PostCreated};
pub use bus::{EventPublisher, PublishError, Subscription, publish_best_effort};
pub use envelope::EventEnvelope;
pub use error::EventError;
pub use event::Event;
pub use handler::{Dispatch, EventConsumer, dispatch, receive};
pub use in_memory_bus::InMemoryEventBus;
