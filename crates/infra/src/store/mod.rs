//! In-memory record storage for the content services.

pub mod record_store;

pub use record_store::{InMemoryStore, RecordStore, StoreError};
