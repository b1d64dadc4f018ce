//! Row-by-row construction of a [`PackedTable`]

use std::io::BufRead;

use tracing::{debug, trace};

use super::PackedTable;
use super::row::PackedRow;
use crate::common::{Error, Result};
use crate::text::{LineReader, MAX_LINE_LEN};

/// Incrementally builds a [`PackedTable`] from input lines.
///
/// Besides the rows themselves, the builder keeps the column bookkeeping the
/// transpose needs: the widest row seen so far, and for every column the
/// 1-based index of the last row reaching it. Column 0 is updated for every
/// line, including empty ones, so it always equals the number of rows read.
#[derive(Debug)]
pub struct TableBuilder {
    rows: Vec<Option<PackedRow>>,
    num_rows_per_col: Vec<u32>,
    num_cols: u32,
    starts: Vec<u32>,
    max_line_len: usize,
    max_rows: usize,
    max_cols: usize,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::with_limits(MAX_LINE_LEN, u32::MAX as usize, u32::MAX as usize)
    }
}

impl TableBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_limits(max_line_len: usize, max_rows: usize, max_cols: usize) -> Self {
        TableBuilder {
            rows: Vec::new(),
            num_rows_per_col: Vec::new(),
            num_cols: 0,
            starts: Vec::new(),
            max_line_len: max_line_len.min(MAX_LINE_LEN),
            max_rows: max_rows.min(u32::MAX as usize),
            max_cols: max_cols.min(u32::MAX as usize),
        }
    }

    /// Number of lines pushed so far
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Append one input line (without its terminator) as the next row.
    ///
    /// On error the builder is left as it was before the call.
    pub fn push_line(&mut self, line: &[u8]) -> Result<()> {
        let index = self.rows.len();
        if index >= self.max_rows {
            return Err(Error::TooManyRows);
        }
        let ordinal = u32::try_from(index + 1).map_err(|_| Error::TooManyRows)?;

        if line.len() > self.max_line_len {
            return Err(Error::LineTooLong {
                line: u64::from(ordinal),
                len: line.len(),
            });
        }

        let row = PackedRow::from_line(line, &mut self.starts)?;
        let fields = row.as_ref().map_or(0, PackedRow::field_count);
        let too_many_columns = || Error::TooManyColumns {
            line: u64::from(ordinal),
        };
        if fields > self.max_cols {
            return Err(too_many_columns());
        }
        let fields_u32 = u32::try_from(fields).map_err(|_| too_many_columns())?;

        let tracked = fields.max(1);
        if self.num_rows_per_col.len() < tracked {
            self.num_rows_per_col
                .try_reserve(tracked - self.num_rows_per_col.len())?;
            self.num_rows_per_col.resize(tracked, 0);
        }
        self.rows.try_reserve(1)?;

        if let Some(row) = &row {
            trace!(row = index, fields, width = %row.width(), "packed row");
        }
        self.rows.push(row);

        self.num_rows_per_col[..tracked].fill(ordinal);
        self.num_cols = self.num_cols.max(fields_u32);

        Ok(())
    }

    /// Read every remaining line from `reader` into the table.
    pub fn read_lines<R: BufRead>(&mut self, reader: &mut LineReader<R>) -> Result<()> {
        let mut line = Vec::new();
        while reader.read_line(&mut line)? {
            self.push_line(&line)?;
        }
        Ok(())
    }

    /// Finish building and return the read-only table
    pub fn finish(self) -> PackedTable {
        let table = PackedTable {
            rows: self.rows,
            num_rows_per_col: self.num_rows_per_col,
            num_cols: self.num_cols,
        };

        let stats = table.stats();
        debug!(
            rows = stats.rows,
            empty_rows = stats.empty_rows,
            columns = stats.columns,
            fields = stats.fields,
            u8_rows = stats.widths[0],
            u16_rows = stats.widths[1],
            u24_rows = stats.widths[2],
            u32_rows = stats.widths[3],
            raw_bytes = stats.raw_bytes,
            offset_bytes = stats.offset_bytes,
            "table ingested"
        );

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::OffsetWidth;

    fn build(lines: &[&[u8]]) -> PackedTable {
        let mut builder = TableBuilder::new();
        for line in lines {
            builder.push_line(line).unwrap();
        }
        builder.finish()
    }

    #[test]
    fn test_counts_every_line() {
        let table = build(&[b"a\tb", b"", b"c"]);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_cols(), 2);
        assert_eq!(table.num_cols_per_row(0), 2);
        assert_eq!(table.num_cols_per_row(1), 0);
        assert_eq!(table.num_cols_per_row(2), 1);
        assert!(table.row(1).is_none());
    }

    #[test]
    fn test_rows_per_col_tracks_last_reaching_row() {
        let table = build(&[b"a\tb\tc", b"d", b"e\tf", b"", b"g"]);
        assert_eq!(table.num_rows_per_col(0), 5);
        assert_eq!(table.num_rows_per_col(1), 3);
        assert_eq!(table.num_rows_per_col(2), 1);
        assert_eq!(table.num_rows_per_col(3), 0);
    }

    #[test]
    fn test_leading_empty_lines() {
        let table = build(&[b"", b""]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_cols(), 0);
        assert_eq!(table.num_rows_per_col(0), 2);
    }

    #[test]
    fn test_width_chosen_per_row() {
        let long = [vec![b'x'; 300], b"\ty".to_vec()].concat();
        let table = build(&[b"a\tb", &long, b"c"]);
        assert_eq!(table.row(0).unwrap().width(), OffsetWidth::U8);
        assert_eq!(table.row(1).unwrap().width(), OffsetWidth::U16);
        assert_eq!(table.row(2).unwrap().width(), OffsetWidth::U8);
        assert_eq!(table.field(1, 1), Some(&b"y"[..]));
    }

    #[test]
    fn test_line_too_long_is_rejected() {
        let mut builder = TableBuilder::with_limits(4, 10, 10);
        builder.push_line(b"abcd").unwrap();
        let err = builder.push_line(b"a\tbcd").unwrap_err();
        assert!(matches!(err, Error::LineTooLong { line: 2, len: 5 }));
        assert_eq!(builder.num_rows(), 1);
    }

    #[test]
    fn test_too_many_rows_is_rejected() {
        let mut builder = TableBuilder::with_limits(16, 2, 10);
        builder.push_line(b"a").unwrap();
        builder.push_line(b"").unwrap();
        assert!(matches!(builder.push_line(b"b"), Err(Error::TooManyRows)));

        let table = builder.finish();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_rows_per_col(0), 2);
    }

    #[test]
    fn test_too_many_columns_is_rejected() {
        let mut builder = TableBuilder::with_limits(16, 10, 2);
        builder.push_line(b"a\tb").unwrap();
        let err = builder.push_line(b"a\tb\tc").unwrap_err();
        assert!(matches!(err, Error::TooManyColumns { line: 2 }));

        let table = builder.finish();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.num_cols(), 2);
        assert_eq!(table.num_rows_per_col(2), 0);
    }

    #[test]
    fn test_read_lines_stops_at_first_error() {
        let mut reader = LineReader::new(&b"ok\ntoo long\nok\n"[..]);
        let mut builder = TableBuilder::with_limits(4, 10, 10);
        let err = builder.read_lines(&mut reader).unwrap_err();
        assert!(matches!(err, Error::LineTooLong { line: 2, len: 8 }));
        assert_eq!(builder.num_rows(), 1);
    }

    #[test]
    fn test_read_lines_from_stream() {
        let mut reader = LineReader::new(std::io::Cursor::new(b"1\t2\r\n\r3".to_vec()));
        let mut builder = TableBuilder::new();
        builder.read_lines(&mut reader).unwrap();
        assert_eq!(builder.num_rows(), 3);

        let table = builder.finish();
        assert_eq!(table.field(0, 1), Some(&b"2"[..]));
        assert_eq!(table.num_cols_per_row(1), 0);
        assert_eq!(table.field(2, 0), Some(&b"3"[..]));
    }
}
