//! Stats Application Service
//!
//! Read-only summaries over the record stores. Every call re-reads the
//! backing file; nothing is cached.

use std::sync::Arc;

use amplifai::{DomainError, LogRecord, MemoryRecord, RecordStore, StoreStats};

/// Upper bound for `recent_memories`
pub const MAX_RECENT_LIMIT: usize = 100;

/// Application service for store statistics
pub struct StatsService<L, M>
where
    L: RecordStore<LogRecord>,
    M: RecordStore<MemoryRecord>,
{
    logs: Arc<L>,
    memory: Arc<M>,
}

impl<L, M> StatsService<L, M>
where
    L: RecordStore<LogRecord>,
    M: RecordStore<MemoryRecord>,
{
    pub fn new(logs: Arc<L>, memory: Arc<M>) -> Self {
        Self { logs, memory }
    }

    pub async fn log_stats(&self) -> Result<StoreStats, DomainError> {
        self.logs.stats().await
    }

    pub async fn memory_stats(&self) -> Result<StoreStats, DomainError> {
        self.memory.stats().await
    }

    pub fn log_location(&self) -> String {
        self.logs.location()
    }

    pub fn memory_location(&self) -> String {
        self.memory.location()
    }

    /// Newest-first memory records, optionally filtered by kind
    pub async fn recent_memories(
        &self,
        kind: Option<String>,
        limit: usize,
    ) -> Result<Vec<MemoryRecord>, DomainError> {
        let limit = limit.min(MAX_RECENT_LIMIT);
        let scan = self.memory.read_all().await?;

        let mut records = tokio::task::spawn_blocking(move || {
            scan.filter(|record| kind.as_deref().map_or(true, |k| record.kind == k))
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|e| DomainError::Storage(format!("read task failed: {e}")))?;

        // Later appends win ties
        records.reverse();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit);
        Ok(records)
    }
}
