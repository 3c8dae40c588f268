//! `quill-core`: blog domain building blocks.
//!
//! Records owned by the content services. This crate contains **pure domain**
//! types (no IO, no HTTP, no storage).

pub mod comment;
pub mod error;
pub mod id;
pub mod post;

pub use comment::{Comment, CommentStatus};
pub use error::DomainError;
pub use id::RecordId;
pub use post::Post;
