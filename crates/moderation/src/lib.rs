//! Moderation service: decides the fate of every new comment.

pub mod app;
pub mod policy;
pub mod service;

pub use policy::ModerationPolicy;
pub use service::ModerationService;
