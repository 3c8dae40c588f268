use std::sync::RwLock;

use thiserror::Error;

use quill_events::EventEnvelope;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("event log lock poisoned")]
    Poisoned,
}

/// Unbounded, append-only, in-memory event log.
///
/// No compaction and no persistence: history lives until the process exits.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: RwLock<Vec<EventEnvelope>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event. Returns its 1-based position in the log.
    pub fn append(&self, envelope: EventEnvelope) -> Result<u64, LogError> {
        let mut entries = self.entries.write().map_err(|_| LogError::Poisoned)?;
        entries.push(envelope);
        Ok(entries.len() as u64)
    }

    /// Every event ever appended, in append order.
    pub fn history(&self) -> Result<Vec<EventEnvelope>, LogError> {
        let entries = self.entries.read().map_err(|_| LogError::Poisoned)?;
        Ok(entries.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn append_assigns_increasing_positions() {
        let log = EventLog::new();
        assert!(log.is_empty());

        assert_eq!(log.append(EventEnvelope::new("A", json!(1))).unwrap(), 1);
        assert_eq!(log.append(EventEnvelope::new("B", json!(2))).unwrap(), 2);

        let types: Vec<_> = log
            .history()
            .unwrap()
            .iter()
            .map(|e| e.event_type().to_string())
            .collect();
        assert_eq!(types, vec!["A", "B"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let log = EventLog::new();
        let env = EventEnvelope::new("A", json!({ "id": "x" }));
        log.append(env.clone()).unwrap();
        log.append(env).unwrap();
        assert_eq!(log.len(), 2);
    }
}
