//! Persistence layer for procurement records.
//!
//! Contains the storage trait and its implementations:
//! - File-backed store (whole-file JSON read/overwrite)
//! - In-memory store (tests, no filesystem side effects)

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::InMemoryStore;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::ProcurementRecord;

/// Storage abstraction over the procurement record collection.
///
/// The collection is always read and written as a whole. `write_all` has
/// full-overwrite semantics: any record previously persisted but omitted from
/// the argument is permanently lost, so callers must pass the complete
/// collection, never deltas.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProcurementStore: Send + Sync {
    /// Read the full collection.
    ///
    /// Absent or empty storage yields an empty collection. Content that
    /// exists but cannot be read or parsed is an error.
    async fn read_all(&self) -> Result<Vec<ProcurementRecord>>;

    /// Overwrite the storage location with the given collection.
    async fn write_all(&self, records: &[ProcurementRecord]) -> Result<()>;

    /// Append one record to the end of the collection.
    ///
    /// The read-modify-write cycle is serialized inside the store, so
    /// concurrent appends cannot lose each other's records.
    async fn append(&self, record: ProcurementRecord) -> Result<()>;
}
