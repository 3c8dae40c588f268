//! Infrastructure layer: storage, outbound HTTP, HTTP edge helpers, configuration.

pub mod config;
pub mod event_bus;
pub mod http;
pub mod store;

pub use config::{RelayConfig, ServiceConfig};
pub use event_bus::HttpEventPublisher;
pub use http::{LenientJson, json_error};
pub use store::{InMemoryStore, RecordStore, StoreError};
