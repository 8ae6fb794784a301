//! In-memory procurement store for tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ProcurementRecord;

use super::{ProcurementStore, Result};

/// Procurement store holding the collection in memory.
///
/// Mirrors the file store's semantics (whole-collection reads and overwrites)
/// without filesystem side effects. Intended for handler tests.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<ProcurementRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records.
    pub fn with_records(records: Vec<ProcurementRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl ProcurementStore for InMemoryStore {
    async fn read_all(&self) -> Result<Vec<ProcurementRecord>> {
        Ok(self.records.lock().await.clone())
    }

    async fn write_all(&self, records: &[ProcurementRecord]) -> Result<()> {
        *self.records.lock().await = records.to_vec();
        Ok(())
    }

    async fn append(&self, record: ProcurementRecord) -> Result<()> {
        self.records.lock().await.push(record);
        Ok(())
    }
}
