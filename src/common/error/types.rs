//! Unified error type for ingest and emission.
use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

use crate::common::binary::BinaryError;

/// Main error type for transpose operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading the input or writing the output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be opened for reading
    #[error("can't open input file {}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be opened for writing
    #[error("can't open output file {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Allocation of row storage or bookkeeping failed
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(#[from] TryReserveError),

    /// Offset array encoding failed
    #[error("Binary encoding error: {0}")]
    Binary(#[from] BinaryError),

    /// Line is too long to address its fields with 32-bit offsets
    #[error("Line {line} is {len} bytes long, which exceeds the 32-bit offset limit")]
    LineTooLong { line: u64, len: usize },

    /// Input has more lines than 32-bit row bookkeeping can count
    #[error("Too many rows: input exceeds {} lines", u32::MAX)]
    TooManyRows,

    /// A line has more fields than 32-bit column bookkeeping can count
    #[error("Too many columns on line {line}: exceeds {} fields", u32::MAX)]
    TooManyColumns { line: u64 },
}

/// Result type for transpose operations.
pub type Result<T> = std::result::Result<T, Error>;
