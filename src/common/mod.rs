//! Common types and utilities shared across the ingest and emit stages.

// Submodule declarations
pub mod binary;
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
