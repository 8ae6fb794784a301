//! File-backed procurement store.
//!
//! The whole collection lives in one JSON file. Every read loads the entire
//! file; every mutation rewrites it. A single mutex serializes all access, so
//! concurrent creates cannot lose each other's records and a read never
//! observes a half-written file through this process.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::ProcurementRecord;

use super::{ProcurementStore, Result, StoreError};

/// Procurement store persisting the collection to a single JSON file.
pub struct FileStore {
    path: PathBuf,
    // Guards the whole read-modify-write cycle, not just the file handle.
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by the file at `path`. The file does not need
    /// to exist; an absent file is a valid empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The storage location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_locked(&self) -> Result<Vec<ProcurementRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Read(e)),
        };

        // Only a truly empty file is an empty collection, same as an absent
        // file. Anything else, whitespace included, must parse.
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_locked(&self, records: &[ProcurementRecord]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(StoreError::Write)?;
        debug!(path = %self.path.display(), count = records.len(), "Persisted record collection");
        Ok(())
    }
}

#[async_trait]
impl ProcurementStore for FileStore {
    async fn read_all(&self) -> Result<Vec<ProcurementRecord>> {
        let _guard = self.lock.lock().await;
        self.read_locked().await
    }

    async fn write_all(&self, records: &[ProcurementRecord]) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.write_locked(records).await
    }

    async fn append(&self, record: ProcurementRecord) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_locked().await?;
        records.push(record);
        self.write_locked(&records).await
    }
}
