//! Comments and their moderation state.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DomainError, RecordId};

/// Moderation state of a comment.
///
/// New comments start `Pending`; a moderation decision moves them to
/// `Approved` or `Rejected`. The transition is a plain overwrite, so applying
/// the same decision twice leaves the comment unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CommentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "pending",
            CommentStatus::Approved => "approved",
            CommentStatus::Rejected => "rejected",
        }
    }
}

impl core::fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(CommentStatus::Pending),
            "approved" => Ok(CommentStatus::Approved),
            "rejected" => Ok(CommentStatus::Rejected),
            other => Err(DomainError::unknown_status(other)),
        }
    }
}

/// A comment, stored under the id of the post it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comment {
    pub id: RecordId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: CommentStatus,
}

impl Comment {
    /// A freshly submitted comment awaiting moderation.
    pub fn pending(id: RecordId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            status: CommentStatus::Pending,
        }
    }

    pub fn set_status(&mut self, status: CommentStatus) {
        self.status = status;
    }
}
