//! StoreStats - Aggregate view over one record file

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::{Record, RecordScan};

/// Counts computed from a full sequential read of a record file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreStats {
    /// Whether the backing file exists yet
    pub exists: bool,
    /// Records successfully parsed
    pub total: usize,
    /// Lines that could not be parsed
    pub malformed: usize,
    /// Record count per category (log level or memory kind)
    pub by_category: BTreeMap<String, usize>,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
    pub size_bytes: u64,
}

impl StoreStats {
    /// Stats for a store whose file has not been created
    pub fn missing() -> Self {
        Self::default()
    }

    /// Drain a scan and aggregate it
    pub fn from_scan<R: Record>(mut scan: RecordScan<R>, size_bytes: u64) -> Self {
        let mut stats = Self {
            exists: true,
            size_bytes,
            ..Self::default()
        };
        for record in scan.by_ref() {
            stats.observe(&record);
        }
        stats.malformed = scan.malformed();
        stats
    }

    fn observe<R: Record>(&mut self, record: &R) {
        self.total += 1;
        *self.by_category.entry(record.category()).or_insert(0) += 1;

        let ts = record.timestamp();
        self.earliest = Some(self.earliest.map_or(ts, |e| e.min(ts)));
        self.latest = Some(self.latest.map_or(ts, |l| l.max(ts)));
    }
}
