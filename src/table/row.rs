//! A single ingested row: one owned buffer holding the line and its packed
//! field offsets

use memchr::{memchr, memchr_iter, memrchr};

use super::offsets::{FieldOffsets, OffsetWidth, encode_offsets};
use crate::common::Result;
use crate::text::{FIELD_TERMINATOR, TAB, split_tabs};

/// One non-empty row of a [`PackedTable`](super::PackedTable).
///
/// `data` starts with the raw line, every tab replaced by a NUL terminator,
/// followed by the offset array at `raw_len`. Field `k` starts at
/// `offsets[k]` and runs up to the next NUL (or the end of the line for the
/// last field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedRow {
    data: Box<[u8]>,
    raw_len: u32,
    width: OffsetWidth,
}

impl PackedRow {
    /// Build a row from one line of input.
    ///
    /// Only the part of `line` before its first NUL byte is kept. Returns
    /// `Ok(None)` when that part is empty: such a line has no fields at all
    /// rather than one empty field. `starts` is scratch space reused across
    /// calls. The line must be at most
    /// [`MAX_LINE_LEN`](crate::text::MAX_LINE_LEN) bytes long.
    pub fn from_line(line: &[u8], starts: &mut Vec<u32>) -> Result<Option<Self>> {
        let line = &line[..memchr(FIELD_TERMINATOR, line).unwrap_or(line.len())];
        if line.is_empty() {
            return Ok(None);
        }

        let fields = memchr_iter(TAB, line).count() + 1;
        let last_start = memrchr(TAB, line).map_or(0, |pos| pos + 1);
        let width = OffsetWidth::for_max_offset(last_start as u32);

        let mut data = Vec::new();
        data.try_reserve_exact(line.len() + fields * width.bytes())?;
        data.extend_from_slice(line);

        split_tabs(&mut data, starts)?;
        encode_offsets(starts, width, &mut data)?;

        Ok(Some(PackedRow {
            data: data.into_boxed_slice(),
            raw_len: line.len() as u32,
            width,
        }))
    }

    /// Number of fields in this row (always at least one)
    #[inline]
    pub fn field_count(&self) -> usize {
        self.offsets().len()
    }

    /// Width chosen for this row's offset array
    #[inline]
    pub fn width(&self) -> OffsetWidth {
        self.width
    }

    /// Packed offset array
    #[inline]
    pub fn offsets(&self) -> FieldOffsets<'_> {
        FieldOffsets::new(self.width, &self.data[self.raw_len as usize..])
    }

    /// Start offset of field `index` within [`raw`](Self::raw)
    #[inline]
    pub fn offset(&self, index: usize) -> Option<u32> {
        self.offsets().get(index)
    }

    /// Raw line buffer, tabs replaced by NUL terminators
    #[inline]
    pub fn raw(&self) -> &[u8] {
        &self.data[..self.raw_len as usize]
    }

    /// Contents of field `index`, up to its terminator.
    pub fn field(&self, index: usize) -> Option<&[u8]> {
        let start = self.offset(index)? as usize;
        let rest = self.raw().get(start..)?;
        let end = memchr(FIELD_TERMINATOR, rest).unwrap_or(rest.len());
        Some(&rest[..end])
    }

    /// Iterate over every field in order
    pub fn fields(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.field_count()).filter_map(move |i| self.field(i))
    }

    /// Heap bytes retained by this row (line buffer plus offset array)
    pub fn heap_bytes(&self) -> usize {
        self.data.len()
    }
}
