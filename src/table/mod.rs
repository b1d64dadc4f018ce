//! Packed jagged table of tab-delimited rows.
//!
//! A [`PackedTable`] holds every input row as a single owned byte buffer plus
//! a side array of field start offsets, instead of one allocation and one
//! pointer per field. Each row's offset array uses the narrowest of four
//! element widths (see [`OffsetWidth`]) able to address its last field, so
//! the bookkeeping overhead on typical numeric data is one or two bytes per
//! field.
//!
//! # Example
//!
//! ```rust
//! use tsv_transpose::table::{OffsetWidth, PackedTable};
//!
//! let table = PackedTable::from_bytes(b"a\tb\tc\nd\te\n")?;
//! assert_eq!(table.num_rows(), 2);
//! assert_eq!(table.num_cols(), 3);
//! assert_eq!(table.field(1, 1), Some(&b"e"[..]));
//! assert_eq!(table.row(0).map(|row| row.width()), Some(OffsetWidth::U8));
//! # Ok::<(), tsv_transpose::Error>(())
//! ```

pub mod builder;
pub mod offsets;
pub mod row;

pub use builder::TableBuilder;
pub use offsets::{FieldOffsets, OffsetWidth, encode_offsets};
pub use row::PackedRow;

use std::io::{BufReader, Read};

use crate::common::Result;
use crate::config::TransposeConfig;
use crate::text::LineReader;

/// Fully ingested, read-only jagged table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedTable {
    pub(crate) rows: Vec<Option<PackedRow>>,
    pub(crate) num_rows_per_col: Vec<u32>,
    pub(crate) num_cols: u32,
}

impl PackedTable {
    /// Ingest a whole stream using the buffer size from `config`.
    pub fn from_reader<R: Read>(reader: R, config: &TransposeConfig) -> Result<Self> {
        let buffered = BufReader::with_capacity(config.input_buffer_size, reader);
        let mut lines = LineReader::new(buffered);
        let mut builder = TableBuilder::new();
        builder.read_lines(&mut lines)?;
        Ok(builder.finish())
    }

    /// Ingest an in-memory document
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut lines = LineReader::new(bytes);
        let mut builder = TableBuilder::new();
        builder.read_lines(&mut lines)?;
        Ok(builder.finish())
    }

    /// Number of input lines, including empty ones
    #[inline]
    pub fn num_rows(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Largest field count of any row
    #[inline]
    pub fn num_cols(&self) -> u32 {
        self.num_cols
    }

    /// Whether no line was read at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field count of row `row` (0 for empty lines and out-of-range rows)
    #[inline]
    pub fn num_cols_per_row(&self, row: usize) -> u32 {
        self.row(row).map_or(0, |r| r.field_count() as u32)
    }

    /// Number of rows to visit when emitting transposed line `col`.
    ///
    /// For column 0 this is the total row count; for other columns it is the
    /// 1-based index of the last row that has a field in that column, or 0
    /// when no row reaches it.
    #[inline]
    pub fn num_rows_per_col(&self, col: usize) -> u32 {
        self.num_rows_per_col.get(col).copied().unwrap_or(0)
    }

    /// Row `row`, or `None` if it was an empty line or is out of range
    #[inline]
    pub fn row(&self, row: usize) -> Option<&PackedRow> {
        self.rows.get(row).and_then(Option::as_ref)
    }

    /// Field `col` of row `row`
    #[inline]
    pub fn field(&self, row: usize, col: usize) -> Option<&[u8]> {
        self.row(row)?.field(col)
    }

    /// Iterate over all rows in input order; empty lines are `None`
    pub fn rows(&self) -> impl Iterator<Item = Option<&PackedRow>> + '_ {
        self.rows.iter().map(Option::as_ref)
    }

    /// Summarise row counts, offset widths and retained memory
    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            rows: self.rows.len() as u64,
            columns: self.num_cols,
            ..TableStats::default()
        };

        for row in &self.rows {
            match row {
                Some(row) => {
                    stats.fields += row.field_count() as u64;
                    stats.widths[row.width().index()] += 1;
                    stats.raw_bytes += row.raw().len() as u64;
                    stats.offset_bytes += row.offsets().as_bytes().len() as u64;
                },
                None => stats.empty_rows += 1,
            }
        }

        stats
    }
}

/// Summary of a [`PackedTable`]'s shape and memory footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Lines read, including empty lines
    pub rows: u64,
    /// Lines with no fields
    pub empty_rows: u64,
    /// Largest field count of any row
    pub columns: u32,
    /// Total number of fields
    pub fields: u64,
    /// Rows per offset width, indexed in [`OffsetWidth::ALL`] order
    pub widths: [u64; 4],
    /// Bytes held in row buffers
    pub raw_bytes: u64,
    /// Bytes held in offset arrays
    pub offset_bytes: u64,
}

impl TableStats {
    /// Number of rows whose offsets are stored with `width`
    pub fn rows_with_width(&self, width: OffsetWidth) -> u64 {
        self.widths[width.index()]
    }

    /// Total row-data bytes retained by the table
    pub fn retained_bytes(&self) -> u64 {
        self.raw_bytes + self.offset_bytes
    }
}

#[cfg(test)]
mod tests;
