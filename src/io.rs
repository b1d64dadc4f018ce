//! File and standard-stream plumbing around the transpose pipeline.
//!
//! The pipeline always reads the whole input before the output is opened, so
//! a missing input never creates or truncates the output file, and nothing is
//! written until the table is complete.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::common::{Error, Result};
use crate::config::TransposeConfig;
use crate::table::{PackedTable, TableStats};
use crate::transpose::write_transposed;

/// Where the table is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file opened read-only
    Path(PathBuf),
}

impl InputSource {
    /// Interpret a command-line argument; absent or `-` means standard input.
    pub fn from_arg<S: AsRef<OsStr>>(arg: Option<S>) -> Self {
        match arg {
            Some(arg) if arg.as_ref() != "-" => InputSource::Path(PathBuf::from(arg.as_ref())),
            _ => InputSource::Stdin,
        }
    }
}

/// Where the transposed table is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file, created or truncated
    Path(PathBuf),
}

impl OutputTarget {
    /// Interpret a command-line argument; absent means standard output.
    pub fn from_arg<S: AsRef<OsStr>>(arg: Option<S>) -> Self {
        match arg {
            Some(arg) => OutputTarget::Path(PathBuf::from(arg.as_ref())),
            None => OutputTarget::Stdout,
        }
    }
}

/// Read and pack the whole input.
pub fn read_table(input: &InputSource, config: &TransposeConfig) -> Result<PackedTable> {
    match input {
        InputSource::Stdin => PackedTable::from_reader(io::stdin().lock(), config),
        InputSource::Path(path) => {
            let file = File::open(path).map_err(|source| Error::InputOpen {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "reading input");
            PackedTable::from_reader(file, config)
        },
    }
}

/// Write the transpose of `table` to `output`, flushing before returning.
pub fn write_table(
    table: &PackedTable,
    output: &OutputTarget,
    config: &TransposeConfig,
) -> Result<()> {
    match output {
        OutputTarget::Stdout => {
            let mut writer = BufWriter::with_capacity(config.output_buffer_size, io::stdout().lock());
            write_transposed(table, &mut writer, config)?;
            writer.flush()?;
        },
        OutputTarget::Path(path) => {
            let file = File::create(path).map_err(|source| Error::OutputOpen {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "writing output");
            let mut writer = BufWriter::with_capacity(config.output_buffer_size, file);
            write_transposed(table, &mut writer, config)?;
            writer.flush()?;
        },
    }
    Ok(())
}

/// Transpose `input` into `output`.
///
/// The input is read completely and released before the output is opened.
/// Returns a summary of the ingested table.
pub fn transpose_file(
    input: &InputSource,
    output: &OutputTarget,
    config: &TransposeConfig,
) -> Result<TableStats> {
    let table = read_table(input, config)?;
    let stats = table.stats();
    write_table(&table, output, config)?;
    Ok(stats)
}
