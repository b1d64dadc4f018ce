//! Column-major emission of a [`PackedTable`].
//!
//! Output line `c` holds field `c` of every input row, tab-separated, in input
//! order. Rows are visited only up to the last one that reaches column `c`
//! (see [`PackedTable::num_rows_per_col`]); a shorter row before that point
//! contributes an empty cell, so ragged input yields ragged output without
//! trailing padding. The first output line is always written, and visits
//! every input row including empty lines.
//!
//! # Example
//!
//! ```rust
//! use tsv_transpose::transpose::transpose_bytes;
//!
//! let output = transpose_bytes(b"a\tb\tc\nd\te\n")?;
//! assert_eq!(output, b"a\td\nb\te\nc\n");
//! # Ok::<(), tsv_transpose::Error>(())
//! ```

use std::io::Write;

use tracing::debug;

use crate::common::Result;
use crate::config::{LineEnding, TransposeConfig};
use crate::table::PackedTable;
use crate::text::TAB;

/// Write the transpose of `table` to `writer`.
///
/// Nothing at all is written for a table with no rows. Any write failure
/// aborts the whole operation.
pub fn write_transposed<W: Write>(
    table: &PackedTable,
    writer: &mut W,
    config: &TransposeConfig,
) -> Result<()> {
    if table.is_empty() {
        return Ok(());
    }

    let eol = config.line_ending.as_bytes();
    // Column 0 exists as soon as there is a row, even if every line was empty
    let out_lines = table.num_cols().max(1) as usize;

    for col in 0..out_lines {
        for row in 0..table.num_rows_per_col(col) as usize {
            if row > 0 {
                writer.write_all(&[TAB])?;
            }
            if let Some(field) = table.field(row, col) {
                writer.write_all(field)?;
            }
        }
        writer.write_all(eol)?;
    }

    debug!(lines = out_lines, rows = table.num_rows(), "table transposed");
    Ok(())
}

/// Transpose an in-memory document, producing `\n`-terminated lines.
pub fn transpose_bytes(input: &[u8]) -> Result<Vec<u8>> {
    let table = PackedTable::from_bytes(input)?;
    let mut output = Vec::new();
    output.try_reserve(input.len() + 1)?;
    let config = TransposeConfig::new().with_line_ending(LineEnding::Lf);
    write_transposed(&table, &mut output, &config)?;
    Ok(output)
}
