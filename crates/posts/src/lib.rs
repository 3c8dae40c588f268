//! Posts service: owns the post collection and announces new posts.

pub mod app;
pub mod errors;
pub mod service;

pub use service::{PostService, ServiceError};
