//! Destructive tab splitting

use memchr::{memchr, memchr_iter};

use crate::common::Result;

/// Field separator byte.
pub const TAB: u8 = b'\t';

/// Byte written over each separator so every field is NUL-terminated.
pub const FIELD_TERMINATOR: u8 = 0;

/// Longest line whose field offsets fit in 32 bits.
pub const MAX_LINE_LEN: usize = u32::MAX as usize;

/// Split `line` on tab bytes in place.
///
/// Every tab is overwritten with [`FIELD_TERMINATOR`] and the start offset of
/// each field is written to `starts` (previous contents are discarded). The
/// first field always starts at offset 0, so a line with `n` tabs yields
/// `n + 1` fields and an empty line yields a single empty field.
///
/// A NUL byte already present in `line` ends the last field: scanning stops
/// there and any tabs after it are left untouched.
///
/// `line` must be at most [`MAX_LINE_LEN`] bytes long.
///
/// # Examples
///
/// ```
/// use tsv_transpose::text::split_tabs;
/// let mut line = b"ab\tc\t".to_vec();
/// let mut starts = Vec::new();
/// assert_eq!(split_tabs(&mut line, &mut starts).unwrap(), 3);
/// assert_eq!(starts, [0, 3, 5]);
/// assert_eq!(line, b"ab\0c\0");
/// ```
pub fn split_tabs(line: &mut [u8], starts: &mut Vec<u32>) -> Result<usize> {
    debug_assert!(line.len() <= MAX_LINE_LEN);

    starts.clear();
    let end = memchr(FIELD_TERMINATOR, line).unwrap_or(line.len());
    let line = &mut line[..end];
    let tabs = memchr_iter(TAB, line).count();
    starts.try_reserve(tabs + 1)?;

    starts.push(0);
    starts.extend(memchr_iter(TAB, line).map(|pos| (pos + 1) as u32));

    for &start in &starts[1..] {
        line[start as usize - 1] = FIELD_TERMINATOR;
    }

    Ok(starts.len())
}
