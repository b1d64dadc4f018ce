//! Little-endian integer helpers for packed offset arrays.
//!
//! Offset arrays are stored as raw byte buffers whose element width is chosen
//! per row. These helpers read and append the 16-, 24- and 32-bit entries with
//! an explicit little-endian byte layout, independent of the host byte order.

use zerocopy::{FromBytes, IntoBytes, LE, U16, U32};

/// Largest value representable by a packed 24-bit entry.
pub const U24_MAX: u32 = 0x00FF_FFFF;

/// Binary parsing error type
#[derive(Debug, Clone)]
pub enum BinaryError {
    /// Not enough data to read or write the requested type
    InsufficientData { expected: usize, available: usize },
    /// Value does not fit the requested encoding
    OutOfRange { value: u32, max: u32 },
}

impl std::fmt::Display for BinaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryError::InsufficientData {
                expected,
                available,
            } => {
                write!(
                    f,
                    "Insufficient data: expected {}, got {}",
                    expected, available
                )
            },
            BinaryError::OutOfRange { value, max } => {
                write!(f, "Value {} exceeds encoding maximum {}", value, max)
            },
        }
    }
}

impl std::error::Error for BinaryError {}

/// Result type for binary operations
pub type BinaryResult<T> = Result<T, BinaryError>;

#[inline]
fn check_len(data_len: usize, offset: usize, size: usize) -> BinaryResult<()> {
    match offset.checked_add(size) {
        Some(end) if end <= data_len => Ok(()),
        _ => Err(BinaryError::InsufficientData {
            expected: offset.saturating_add(size),
            available: data_len,
        }),
    }
}

/// Read a little-endian u16 from a byte slice at the given offset.
///
/// # Examples
///
/// ```
/// use tsv_transpose::common::binary::read_u16_le;
/// let data = [0x34, 0x12, 0x78, 0x56];
/// assert_eq!(read_u16_le(&data, 0).unwrap(), 0x1234);
/// assert_eq!(read_u16_le(&data, 2).unwrap(), 0x5678);
/// ```
#[inline]
pub fn read_u16_le(data: &[u8], offset: usize) -> BinaryResult<u16> {
    check_len(data.len(), offset, 2)?;
    U16::<LE>::read_from_bytes(&data[offset..offset + 2])
        .map(|v| v.get())
        .map_err(|_| BinaryError::InsufficientData {
            expected: offset + 2,
            available: data.len(),
        })
}

/// Read a packed 24-bit entry: a little-endian u16 low word followed by
/// one high byte.
///
/// # Examples
///
/// ```
/// use tsv_transpose::common::binary::read_u24_le;
/// let data = [0x56, 0x34, 0x12];
/// assert_eq!(read_u24_le(&data, 0).unwrap(), 0x123456);
/// ```
#[inline]
pub fn read_u24_le(data: &[u8], offset: usize) -> BinaryResult<u32> {
    check_len(data.len(), offset, 3)?;
    let low = read_u16_le(data, offset)?;
    let high = data[offset + 2];
    Ok(u32::from(low) | (u32::from(high) << 16))
}

/// Read a little-endian u32 from a byte slice at the given offset.
///
/// # Examples
///
/// ```
/// use tsv_transpose::common::binary::read_u32_le;
/// let data = [0x78, 0x56, 0x34, 0x12];
/// assert_eq!(read_u32_le(&data, 0).unwrap(), 0x12345678);
/// ```
#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> BinaryResult<u32> {
    check_len(data.len(), offset, 4)?;
    U32::<LE>::read_from_bytes(&data[offset..offset + 4])
        .map(|v| v.get())
        .map_err(|_| BinaryError::InsufficientData {
            expected: offset + 4,
            available: data.len(),
        })
}

/// Append a little-endian u16 to `buf`.
#[inline]
pub fn put_u16_le(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(U16::<LE>::new(value).as_bytes());
}

/// Append a packed 24-bit entry (low u16 little-endian, then the high byte).
///
/// # Examples
///
/// ```
/// use tsv_transpose::common::binary::{put_u24_le, read_u24_le};
/// let mut data = Vec::new();
/// put_u24_le(&mut data, 0xABCDEF).unwrap();
/// assert_eq!(data, [0xEF, 0xCD, 0xAB]);
/// assert_eq!(read_u24_le(&data, 0).unwrap(), 0xABCDEF);
/// ```
#[inline]
pub fn put_u24_le(buf: &mut Vec<u8>, value: u32) -> BinaryResult<()> {
    if value > U24_MAX {
        return Err(BinaryError::OutOfRange {
            value,
            max: U24_MAX,
        });
    }
    put_u16_le(buf, value as u16);
    buf.push((value >> 16) as u8);
    Ok(())
}

/// Append a little-endian u32 to `buf`.
#[inline]
pub fn put_u32_le(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(U32::<LE>::new(value).as_bytes());
}
