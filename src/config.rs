//! Configuration for reading and writing transposed tables

/// Default I/O buffer size for both streams (1 MiB).
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Line terminator written after each transposed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Terminator a text-mode stream produces for `\n` on this platform
    pub const fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// Bytes of the terminator
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

/// Configuration for ingesting and emitting a table
#[derive(Debug, Clone)]
pub struct TransposeConfig {
    /// Buffer size for reading the input stream
    pub input_buffer_size: usize,
    /// Buffer size for writing the output stream
    pub output_buffer_size: usize,
    /// Terminator written after every output line
    pub line_ending: LineEnding,
}

impl Default for TransposeConfig {
    fn default() -> Self {
        Self {
            input_buffer_size: DEFAULT_BUFFER_SIZE,
            output_buffer_size: DEFAULT_BUFFER_SIZE,
            line_ending: LineEnding::native(),
        }
    }
}

impl TransposeConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the buffer size of both streams
    pub fn with_buffer_size(self, size: usize) -> Self {
        self.with_input_buffer_size(size).with_output_buffer_size(size)
    }

    /// Set the input buffer size (at least one byte)
    pub fn with_input_buffer_size(mut self, size: usize) -> Self {
        self.input_buffer_size = size.max(1);
        self
    }

    /// Set the output buffer size (at least one byte)
    pub fn with_output_buffer_size(mut self, size: usize) -> Self {
        self.output_buffer_size = size.max(1);
        self
    }

    /// Set the output line terminator
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
