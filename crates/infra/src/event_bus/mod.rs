//! Infrastructure event bus implementations.
//!
//! The publishing abstraction lives in `quill-events` as pure mechanics.
//! This module provides the HTTP-backed implementation.

pub mod http;

pub use http::HttpEventPublisher;
