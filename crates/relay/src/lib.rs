//! Relay ("event bus"): logs every event and rebroadcasts it to every
//! participant, the originator included.

pub mod app;
pub mod errors;
pub mod log;
pub mod relay;

pub use log::{EventLog, LogError};
pub use relay::{Broadcast, Participant, Relay};
