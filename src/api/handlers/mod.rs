//! REST API handlers.

pub mod health;
pub mod procurement;

pub use health::*;
pub use procurement::*;
