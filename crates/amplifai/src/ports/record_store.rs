//! Record Store Port
//!
//! Append-only persistence of structured records with sequential
//! read-back. Used for both the operational log and the memory store.

use std::io;
use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::StoreStats;
use crate::domain::errors::DomainError;

/// A record that can live in a [`RecordStore`]
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Grouping key for stats (log level, memory kind)
    fn category(&self) -> String;

    fn timestamp(&self) -> DateTime<Utc>;
}

/// Repository interface for append-only record files
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Append one record as a single line
    ///
    /// The record is durably written before this returns.
    async fn append(&self, record: &R) -> Result<(), DomainError>;

    /// Open a lazy, in-order scan over all records
    ///
    /// A store with no backing file yields an empty scan.
    async fn read_all(&self) -> Result<RecordScan<R>, DomainError>;

    /// Full-read aggregate over the store
    async fn stats(&self) -> Result<StoreStats, DomainError>;

    /// Human readable location (file path)
    fn location(&self) -> String;
}

type LineSource = Box<dyn Iterator<Item = io::Result<Vec<u8>>> + Send>;

/// Lazy sequence of records decoded from raw lines
///
/// Blank lines are ignored. Lines that fail to decode are skipped and
/// counted in [`malformed`](Self::malformed). A read error counts as one
/// malformed line and ends the scan.
pub struct RecordScan<R> {
    lines: Option<LineSource>,
    line_no: usize,
    malformed: usize,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordScan<R> {
    pub fn new<I>(lines: I) -> Self
    where
        I: Iterator<Item = io::Result<Vec<u8>>> + Send + 'static,
    {
        Self {
            lines: Some(Box::new(lines)),
            line_no: 0,
            malformed: 0,
            _record: PhantomData,
        }
    }

    pub fn empty() -> Self {
        Self {
            lines: None,
            line_no: 0,
            malformed: 0,
            _record: PhantomData,
        }
    }

    /// Lines skipped so far
    pub fn malformed(&self) -> usize {
        self.malformed
    }
}

impl<R: Record> Iterator for RecordScan<R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            let next = self.lines.as_mut()?.next();
            let line = match next {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    tracing::warn!(line = self.line_no + 1, error = %e, "Record read aborted");
                    self.malformed += 1;
                    self.lines = None;
                    return None;
                }
                None => {
                    self.lines = None;
                    return None;
                }
            };
            self.line_no += 1;

            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            match serde_json::from_slice::<R>(&line) {
                Ok(record) => return Some(record),
                Err(e) => {
                    tracing::warn!(line = self.line_no, error = %e, "Skipping malformed record");
                    self.malformed += 1;
                }
            }
        }
    }
}
