//! Tests for the packed table representation

use super::*;

/// Line whose last field starts exactly at `max_offset`.
fn line_with_last_offset(max_offset: u32) -> Vec<u8> {
    let mut line = vec![b'x'; max_offset as usize - 1];
    line.push(b'\t');
    line.extend_from_slice(b"tail");
    line
}

#[test]
fn test_width_boundaries_decode_identically() {
    let cases = [
        (255, OffsetWidth::U8),
        (256, OffsetWidth::U16),
        (65_535, OffsetWidth::U16),
        (65_536, OffsetWidth::U24),
        (16_777_215, OffsetWidth::U24),
        (16_777_216, OffsetWidth::U32),
    ];

    for (max_offset, expected) in cases {
        let line = line_with_last_offset(max_offset);
        let mut starts = Vec::new();
        let row = PackedRow::from_line(&line, &mut starts).unwrap().unwrap();

        assert_eq!(row.width(), expected, "max offset {max_offset}");
        assert_eq!(row.offset(1), Some(max_offset));
        assert_eq!(row.field(0).map(<[u8]>::len), Some(max_offset as usize - 1));
        assert_eq!(row.field(1), Some(&b"tail"[..]));

        // Forcing any wider encoding must not change what is decoded
        for width in OffsetWidth::ALL.into_iter().filter(|w| *w >= expected) {
            let mut data = Vec::new();
            encode_offsets(&starts, width, &mut data).unwrap();
            let forced = FieldOffsets::new(width, &data);
            assert_eq!(
                forced.iter().collect::<Vec<_>>(),
                row.offsets().iter().collect::<Vec<_>>()
            );
        }
    }
}

#[test]
fn test_from_bytes_matches_builder() {
    let input = b"a\tb\tc\n\nd\te\n";
    let from_bytes = PackedTable::from_bytes(input).unwrap();
    let from_reader =
        PackedTable::from_reader(&input[..], &TransposeConfig::new().with_buffer_size(2)).unwrap();
    assert_eq!(from_bytes, from_reader);
    assert_eq!(from_bytes.num_rows(), 3);
    assert_eq!(from_bytes.num_cols(), 3);
}

#[test]
fn test_empty_input_is_empty_table() {
    let table = PackedTable::from_bytes(b"").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.num_cols(), 0);
    assert_eq!(table.num_rows_per_col(0), 0);
}

#[test]
fn test_single_eol_is_one_empty_row() {
    let table = PackedTable::from_bytes(b"\n").unwrap();
    assert!(!table.is_empty());
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.num_cols(), 0);
    assert_eq!(table.num_cols_per_row(0), 0);
}

#[test]
fn test_rows_iterator_marks_empty_lines() {
    let table = PackedTable::from_bytes(b"a\n\nb\tc").unwrap();
    let shape: Vec<usize> = table
        .rows()
        .map(|row| row.map_or(0, PackedRow::field_count))
        .collect();
    assert_eq!(shape, [1, 0, 2]);
}

#[test]
fn test_stats() {
    let long = line_with_last_offset(300);
    let mut input = b"a\tb\n\nc\n".to_vec();
    input.extend_from_slice(&long);
    let table = PackedTable::from_bytes(&input).unwrap();

    let stats = table.stats();
    assert_eq!(stats.rows, 4);
    assert_eq!(stats.empty_rows, 1);
    assert_eq!(stats.columns, 2);
    assert_eq!(stats.fields, 5);
    assert_eq!(stats.rows_with_width(OffsetWidth::U8), 2);
    assert_eq!(stats.rows_with_width(OffsetWidth::U16), 1);
    assert_eq!(stats.rows_with_width(OffsetWidth::U32), 0);
    assert_eq!(stats.raw_bytes, 3 + 1 + long.len() as u64);
    assert_eq!(stats.offset_bytes, 2 + 1 + 4);
    assert_eq!(stats.retained_bytes(), stats.raw_bytes + stats.offset_bytes);
}
