//! JSON Lines Record Store
//!
//! Append-only flat file with one JSON document per line. Every append
//! is a single `write_all` on a file opened in append mode, so concurrent
//! writers interleave whole lines only.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use amplifai::{DomainError, Record, RecordScan, RecordStore, StoreStats};

/// File-backed [`RecordStore`] for any [`Record`] type
pub struct JsonlStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonlStore<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_blocking(path: &Path, line: &[u8]) -> Result<(), DomainError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line)?;
        file.flush()?;
        file.sync_data()?;
        Ok(())
    }

    fn open_scan(path: &Path) -> Result<Option<(RecordScan<R>, u64)>, DomainError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let size = file.metadata()?.len();
        let lines = BufReader::new(file).split(b'\n');
        Ok(Some((RecordScan::new(lines), size)))
    }
}

impl<R> Clone for JsonlStore<R> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for JsonlStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonlStore").field("path", &self.path).finish()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for JsonlStore<R> {
    async fn append(&self, record: &R) -> Result<(), DomainError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::append_blocking(&path, &line))
            .await
            .map_err(|e| DomainError::Storage(format!("append task failed: {e}")))?
    }

    async fn read_all(&self) -> Result<RecordScan<R>, DomainError> {
        let path = self.path.clone();
        let opened = tokio::task::spawn_blocking(move || Self::open_scan(&path))
            .await
            .map_err(|e| DomainError::Storage(format!("read task failed: {e}")))??;

        Ok(opened.map(|(scan, _)| scan).unwrap_or_else(RecordScan::empty))
    }

    async fn stats(&self) -> Result<StoreStats, DomainError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<StoreStats, DomainError> {
            Ok(match Self::open_scan(&path)? {
                Some((scan, size)) => StoreStats::from_scan(scan, size),
                None => StoreStats::missing(),
            })
        })
        .await
        .map_err(|e| DomainError::Storage(format!("stats task failed: {e}")))?
    }

    fn location(&self) -> String {
        self.path().display().to_string()
    }
}
