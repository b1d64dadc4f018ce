//! Adaptive-width field offset arrays.
//!
//! Each row stores the start offset of every field in a byte array whose
//! element width is the narrowest of 8, 16, 24 or 32 bits that can hold the
//! row's largest offset. Since offsets increase left to right, the largest
//! offset is always the last one.

use crate::common::Result;
use crate::common::binary::{
    BinaryError, U24_MAX, put_u16_le, put_u24_le, put_u32_le, read_u16_le, read_u24_le,
    read_u32_le,
};

/// Storage width of one entry in a [`FieldOffsets`] array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OffsetWidth {
    /// One byte per entry, offsets up to 255
    U8,
    /// Two bytes per entry, offsets up to 65 535
    U16,
    /// Three bytes per entry (little-endian low word, then high byte),
    /// offsets up to 16 777 215
    U24,
    /// Four bytes per entry
    U32,
}

impl OffsetWidth {
    /// All widths, narrowest first.
    pub const ALL: [OffsetWidth; 4] = [
        OffsetWidth::U8,
        OffsetWidth::U16,
        OffsetWidth::U24,
        OffsetWidth::U32,
    ];

    /// Narrowest width able to represent `max_offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsv_transpose::table::OffsetWidth;
    /// assert_eq!(OffsetWidth::for_max_offset(255), OffsetWidth::U8);
    /// assert_eq!(OffsetWidth::for_max_offset(256), OffsetWidth::U16);
    /// assert_eq!(OffsetWidth::for_max_offset(16_777_216), OffsetWidth::U32);
    /// ```
    #[inline]
    pub const fn for_max_offset(max_offset: u32) -> Self {
        if max_offset > U24_MAX {
            OffsetWidth::U32
        } else if max_offset > u16::MAX as u32 {
            OffsetWidth::U24
        } else if max_offset > u8::MAX as u32 {
            OffsetWidth::U16
        } else {
            OffsetWidth::U8
        }
    }

    /// Bytes per entry
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            OffsetWidth::U8 => 1,
            OffsetWidth::U16 => 2,
            OffsetWidth::U24 => 3,
            OffsetWidth::U32 => 4,
        }
    }

    /// Bits per entry
    #[inline]
    pub const fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }

    /// Largest offset an entry of this width can hold
    #[inline]
    pub const fn max_offset(self) -> u32 {
        match self {
            OffsetWidth::U8 => u8::MAX as u32,
            OffsetWidth::U16 => u16::MAX as u32,
            OffsetWidth::U24 => U24_MAX,
            OffsetWidth::U32 => u32::MAX,
        }
    }

    /// Position of this width in [`OffsetWidth::ALL`]
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.bytes() - 1
    }
}

impl std::fmt::Display for OffsetWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Append the little-endian encoding of `starts` at `width` to `out`.
///
/// Fails with [`BinaryError::OutOfRange`] if an offset does not fit.
pub fn encode_offsets(starts: &[u32], width: OffsetWidth, out: &mut Vec<u8>) -> Result<()> {
    let max = width.max_offset();
    if let Some(&value) = starts.iter().find(|&&v| v > max) {
        return Err(BinaryError::OutOfRange { value, max }.into());
    }

    out.try_reserve_exact(starts.len() * width.bytes())?;

    match width {
        OffsetWidth::U8 => out.extend(starts.iter().map(|&v| v as u8)),
        OffsetWidth::U16 => {
            for &v in starts {
                put_u16_le(out, v as u16);
            }
        },
        OffsetWidth::U24 => {
            for &v in starts {
                put_u24_le(out, v)?;
            }
        },
        OffsetWidth::U32 => {
            for &v in starts {
                put_u32_le(out, v);
            }
        },
    }
    Ok(())
}

/// Read-only view of one row's packed field start offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOffsets<'a> {
    width: OffsetWidth,
    data: &'a [u8],
}

impl<'a> FieldOffsets<'a> {
    /// View `data` as entries of `width` bytes each.
    ///
    /// A trailing partial entry is ignored.
    #[inline]
    pub fn new(width: OffsetWidth, data: &'a [u8]) -> Self {
        FieldOffsets { width, data }
    }

    /// Entry width chosen for this row
    #[inline]
    pub fn width(&self) -> OffsetWidth {
        self.width
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.width.bytes()
    }

    /// Whether the array has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode entry `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        let pos = index.checked_mul(self.width.bytes())?;
        match self.width {
            OffsetWidth::U8 => self.data.get(pos).map(|&b| u32::from(b)),
            OffsetWidth::U16 => read_u16_le(self.data, pos).ok().map(u32::from),
            OffsetWidth::U24 => read_u24_le(self.data, pos).ok(),
            OffsetWidth::U32 => read_u32_le(self.data, pos).ok(),
        }
    }

    /// Iterate over all decoded offsets
    pub fn iter(self) -> impl Iterator<Item = u32> + 'a {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Encoded bytes, in the little-endian layout of [`OffsetWidth`]
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}
