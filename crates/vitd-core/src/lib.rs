//! vitd-core
//!
//! Pure domain types for vitamin-D screening camps: patient input, the
//! persisted patient row, and the camp record. No scoring logic lives
//! here; this is the shared vocabulary of the engine and its hosts.

pub mod error;
pub mod models;
