//! Record identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Number of hex characters in a generated identifier.
const TOKEN_LEN: usize = 8;

/// Identifier of a post or comment.
///
/// An opaque short token, unique within the owning service. Identifiers that
/// arrive from the outside (paths, event payloads) are taken verbatim; only
/// generated ones follow the 8-hex-char shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh identifier from a random (v4) UUID.
    pub fn generate() -> Self {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(TOKEN_LEN);
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("RecordId: empty"));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_short_hex_tokens() {
        let id = RecordId::generate();
        assert_eq!(id.as_str().len(), TOKEN_LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn parse_rejects_blank() {
        assert!("".parse::<RecordId>().is_err());
        assert!("   ".parse::<RecordId>().is_err());
        assert_eq!("abc".parse::<RecordId>().unwrap(), RecordId::from("abc"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::from("deadbeef");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("deadbeef"));
    }

    proptest! {
        #[test]
        fn generated_ids_do_not_repeat_in_a_batch(n in 1usize..50) {
            let ids: HashSet<RecordId> = (0..n).map(|_| RecordId::generate()).collect();
            prop_assert_eq!(ids.len(), n);
        }
    }
}
