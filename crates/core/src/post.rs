use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A blog post owned by the posts service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
}

impl Post {
    pub fn new(id: RecordId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
