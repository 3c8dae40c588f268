//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Kept small on purpose: the services accept whatever content they are
/// given, so the only deterministic failures are parse failures of
/// enumerated values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A comment status word was not one of the known states.
    #[error("unknown comment status: {0}")]
    UnknownStatus(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_status(msg: impl Into<String>) -> Self {
        Self::UnknownStatus(msg.into())
    }
}
