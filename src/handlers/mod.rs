//! HTTP handlers for the catalog and the liveness probe.

pub mod catalog;
pub mod health;
pub use catalog::*;
pub use health::*;
