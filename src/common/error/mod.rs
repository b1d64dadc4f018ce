//! Unified error types for tsv-transpose.
//!
//! Every failure in the pipeline (opening streams, reading input, allocating
//! row storage, writing output) is reported through a single error type.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
