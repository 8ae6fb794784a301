//! Procurement record type.
//!
//! This is the canonical record structure for all procurement entries. Wire
//! field names are camelCase to match the persisted file and the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single produce procurement entry.
///
/// Records are created once and never updated or deleted. The collection of
/// records is persisted as a whole on every mutation, so equality is
/// field-for-field (used by round-trip tests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRecord {
    /// Unique record identifier, timestamp-derived (milliseconds) and
    /// strictly increasing within a process.
    pub id: i64,

    /// Name of the procured produce. Required, non-empty.
    pub produce_name: String,

    /// Procured quantity in tonnes. Zero and negative values are accepted.
    pub tonnage: f64,

    /// Procurement cost. Zero and negative values are accepted.
    pub cost: f64,

    /// Creation instant, RFC 3339 on the wire.
    pub created_at: DateTime<Utc>,
}

impl ProcurementRecord {
    /// Create a new record stamped with the current instant.
    pub fn new(id: i64, produce_name: impl Into<String>, tonnage: f64, cost: f64) -> Self {
        Self {
            id,
            produce_name: produce_name.into(),
            tonnage,
            cost,
            created_at: Utc::now(),
        }
    }
}
