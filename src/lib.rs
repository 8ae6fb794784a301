//! KGL Procurement Service Library
//!
//! Small HTTP service for recording produce procurement at Karibu Groceries
//! Ltd. Exposes list and create operations over a single collection of
//! procurement records persisted as a flat JSON file.
//!
//! ## Modules
//!
//! - [`domain`] - Core domain types (procurement records, record ids)
//! - [`store`] - Persistence layer (file-backed and in-memory stores)
//! - [`api`] - REST API routes and error responses
//! - [`server`] - Configuration and HTTP server bootstrap

pub mod api;
pub mod domain;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use domain::{ProcurementRecord, RecordIdGenerator};
pub use store::{FileStore, InMemoryStore, ProcurementStore, Result, StoreError};
