//! Core domain types for the KGL procurement service.

mod id;
mod record;

pub use id::RecordIdGenerator;
pub use record::ProcurementRecord;
