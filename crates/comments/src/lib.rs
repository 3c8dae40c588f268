//! Comments service: owns comments per post and applies moderation results.

pub mod app;
pub mod service;

pub use service::CommentService;
