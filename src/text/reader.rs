//! Streaming line reader that accepts mixed line-ending conventions

use std::io::{BufRead, ErrorKind};

use memchr::memchr2;

use crate::common::Result;

/// Reads logical lines from a byte stream.
///
/// `\n`, `\r\n` and a bare `\r` all terminate a line, and may be freely mixed
/// within the same stream. The line terminator is stripped. A final line
/// without a terminator is still returned; a stream that produced no bytes at
/// all yields no line.
pub struct LineReader<R: BufRead> {
    reader: R,
    /// The previous line ended in `\r`; a leading `\n` belongs to that EOL.
    pending_cr: bool,
    line_number: u64,
}

impl<R: BufRead> LineReader<R> {
    /// Create a new line reader
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            pending_cr: false,
            line_number: 0,
        }
    }

    /// Number of lines returned so far
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Read the next line into `line`, replacing its previous contents.
    ///
    /// Returns `Ok(false)` at end of stream, in which case `line` is empty.
    /// A line consisting only of a terminator returns `Ok(true)` with an empty
    /// buffer.
    pub fn read_line(&mut self, line: &mut Vec<u8>) -> Result<bool> {
        line.clear();
        let mut anything = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                if anything {
                    self.line_number += 1;
                }
                return Ok(anything);
            }

            if self.pending_cr {
                self.pending_cr = false;
                if available[0] == b'\n' {
                    // Second half of a CRLF split across two reads
                    self.reader.consume(1);
                    continue;
                }
            }

            anything = true;
            match memchr2(b'\n', b'\r', available) {
                Some(pos) => {
                    let eol = available[pos];
                    line.try_reserve(pos)?;
                    line.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    self.pending_cr = eol == b'\r';
                    self.line_number += 1;
                    return Ok(true);
                },
                None => {
                    let len = available.len();
                    line.try_reserve(len)?;
                    line.extend_from_slice(available);
                    self.reader.consume(len);
                },
            }
        }
    }

    /// Iterate over the remaining lines as owned buffers
    pub fn lines(self) -> Lines<R> {
        Lines { inner: self }
    }
}

/// Iterator over owned lines, produced by [`LineReader::lines`]
pub struct Lines<R: BufRead> {
    inner: LineReader<R>,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.inner.read_line(&mut line) {
            Ok(true) => Some(Ok(line)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
