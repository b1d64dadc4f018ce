//! tsv-transpose - memory-efficient transposition of tab-delimited text
//!
//! Row *i*, column *j* of the input becomes row *j*, column *i* of the
//! output. Rows may have different lengths ("jagged" tables); short rows are
//! never padded with extra cells.
//!
//! # Features
//!
//! - **Compact rows**: each row is a single owned buffer plus one offset per
//!   field, instead of one allocation and one pointer per field
//! - **Adaptive offsets**: each row's offsets are stored in 8, 16, 24 or 32
//!   bits, whichever is the narrowest that fits the row
//! - **Any line ending**: `\n`, `\r\n` and `\r` may be mixed in one file
//! - **Fail-safe allocation**: running out of memory is reported as an error
//!   rather than aborting the process
//!
//! # Example - Transposing bytes
//!
//! ```rust
//! use tsv_transpose::transpose_bytes;
//!
//! let output = transpose_bytes(b"a\tb\tc\nd\te\n")?;
//! assert_eq!(output, b"a\td\nb\te\nc\n");
//! # Ok::<(), tsv_transpose::Error>(())
//! ```
//!
//! # Example - Transposing files
//!
//! ```no_run
//! use tsv_transpose::{InputSource, OutputTarget, TransposeConfig, transpose_file};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let stats = transpose_file(
//!     &InputSource::Path("matrix.tsv".into()),
//!     &OutputTarget::Path("matrix.T.tsv".into()),
//!     &TransposeConfig::default(),
//! )?;
//! println!("{} rows x {} columns", stats.rows, stats.columns);
//! # Ok(())
//! # }
//! ```

/// Shared error type and little-endian helpers
pub mod common;

/// Buffer sizes and output line endings
pub mod config;

/// Input/output stream handling for the full pipeline
pub mod io;

/// Packed jagged table and its builder
pub mod table;

/// Line reading and tab splitting
pub mod text;

/// Column-major writer
pub mod transpose;

pub use common::{Error, Result};
pub use config::{LineEnding, TransposeConfig};
pub use io::{InputSource, OutputTarget, transpose_file};
pub use table::{PackedTable, TableStats};
pub use transpose::{transpose_bytes, write_transposed};
