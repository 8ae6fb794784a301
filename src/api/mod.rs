//! API layer for the KGL procurement service.
//!
//! Provides the REST endpoints for listing and creating procurement records.

mod error;
pub mod handlers;
mod rest;
mod types;

pub use error::ApiError;
pub use rest::router;
pub use types::*;
