//! MemoryRecord - Long-term record of accepted requests
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::Record;

/// Kind tag for campaign launches
pub const KIND_CAMPAIGN: &str = "campaign";
/// Kind tag for playbook uploads (JSON and file)
pub const KIND_PLAYBOOK: &str = "playbook";
/// Kind tag for generic route requests
pub const KIND_ROUTE: &str = "route";

/// MemoryRecord - A piece of stored knowledge about an accepted request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryRecord {
    /// Unique identifier ("mem_" prefixed)
    pub id: String,
    /// When this record was created
    pub timestamp: DateTime<Utc>,
    /// Record kind ("campaign", "playbook", "route", ...)
    pub kind: String,
    /// Kind-specific data
    pub data: serde_json::Value,
    /// Additional metadata (entity type, entity id, ...)
    #[serde(default = "empty_object")]
    pub metadata: serde_json::Value,
}

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}

impl MemoryRecord {
    /// Create a new record with generated ID and timestamp
    pub fn new(kind: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: format!("mem_{}", uuid::Uuid::new_v4().simple()),
            timestamp: Utc::now(),
            kind: kind.into(),
            data,
            metadata: empty_object(),
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

impl Record for MemoryRecord {
    fn category(&self) -> String {
        self.kind.clone()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_prefixed_ids() {
        let a = MemoryRecord::new(KIND_ROUTE, serde_json::json!({}));
        let b = MemoryRecord::new(KIND_ROUTE, serde_json::json!({}));

        assert!(a.id.starts_with("mem_"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.metadata, serde_json::json!({}));
    }

    #[test]
    fn test_missing_metadata_defaults_to_empty_object() {
        let line = r#"{"id":"mem_1","timestamp":"2024-01-01T12:00:00Z","kind":"campaign","data":{}}"#;
        let record: MemoryRecord = serde_json::from_str(line).unwrap();

        assert_eq!(record.kind, "campaign");
        assert_eq!(record.metadata, serde_json::json!({}));
    }
}
