//! Line and field primitives for tab-delimited input.
//!
//! [`LineReader`] turns a byte stream into logical lines, accepting `\n`,
//! `\r\n` and bare `\r` terminators (mixed freely within one stream), and
//! [`split_tabs`] splits a line into fields in place by overwriting each tab
//! with a NUL terminator and recording the field start offsets.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use tsv_transpose::text::{LineReader, split_tabs};
//!
//! let mut reader = LineReader::new(Cursor::new(b"a\tb\r\nc".to_vec()));
//! let mut line = Vec::new();
//! let mut starts = Vec::new();
//!
//! assert!(reader.read_line(&mut line)?);
//! assert_eq!(split_tabs(&mut line, &mut starts)?, 2);
//! assert_eq!(starts, [0, 2]);
//! # Ok::<(), tsv_transpose::Error>(())
//! ```

pub mod reader;
pub mod split;

pub use reader::{LineReader, Lines};
pub use split::{FIELD_TERMINATOR, MAX_LINE_LEN, TAB, split_tabs};
