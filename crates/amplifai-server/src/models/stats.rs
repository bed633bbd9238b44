//! Stats DTOs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use amplifai::{MemoryRecord, StoreStats};

/// Summary of the operational log file
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogStatsResponse {
    pub total_entries: usize,
    /// Entry count per level (INFO, WARNING, ERROR, DEBUG)
    pub by_level: BTreeMap<String, usize>,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
    pub file_size_bytes: u64,
    pub malformed_lines: usize,
    pub file_exists: bool,
    pub log_file_path: String,
}

impl LogStatsResponse {
    pub fn from_stats(stats: StoreStats, path: String) -> Self {
        Self {
            total_entries: stats.total,
            by_level: stats.by_category,
            earliest: stats.earliest,
            latest: stats.latest,
            file_size_bytes: stats.size_bytes,
            malformed_lines: stats.malformed,
            file_exists: stats.exists,
            log_file_path: path,
        }
    }
}

/// Summary of the memory file
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemoryStatsResponse {
    pub total_memories: usize,
    /// Record count per kind (campaign, playbook, route, ...)
    pub by_kind: BTreeMap<String, usize>,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
    pub file_size_bytes: u64,
    pub malformed_lines: usize,
    pub file_exists: bool,
    pub memory_file_path: String,
}

impl MemoryStatsResponse {
    pub fn from_stats(stats: StoreStats, path: String) -> Self {
        Self {
            total_memories: stats.total,
            by_kind: stats.by_category,
            earliest: stats.earliest,
            latest: stats.latest,
            file_size_bytes: stats.size_bytes,
            malformed_lines: stats.malformed,
            file_exists: stats.exists,
            memory_file_path: path,
        }
    }
}

/// Query for recent memories
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentMemoriesQuery {
    /// Only return records of this kind
    pub kind: Option<String>,
    /// Maximum records (default 10, capped at 100)
    pub limit: Option<usize>,
}

/// A stored memory record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemoryRecordResponse {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: String,
    pub data: serde_json::Value,
    pub metadata: serde_json::Value,
}

impl From<MemoryRecord> for MemoryRecordResponse {
    fn from(record: MemoryRecord) -> Self {
        Self {
            id: record.id,
            timestamp: record.timestamp,
            kind: record.kind,
            data: record.data,
            metadata: record.metadata,
        }
    }
}
