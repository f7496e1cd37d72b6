//! Skills Core: shared types and errors for the icon catalog.
//!
//! This crate has no internal dependencies (dependency level 0). Every other
//! crate in the workspace builds on the types defined here.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`icon`]: Icon records and upstream payload shapes
//! - [`order`]: Deterministic id ordering for catalog output

pub mod error;
pub mod icon;
pub mod order;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use icon::{CatalogEntry, CatalogPayload, IconRecord, ResponseEnvelope};
pub use order::{compare_ids, sort_by_id};
