//! Command-line entry point: transpose a tab-delimited file.
//!
//! # Usage
//!
//! ```sh
//! tsv-transpose [INPUT] [OUTPUT]
//! ```
//!
//! `INPUT` defaults to standard input (also selected by `-`), `OUTPUT` to
//! standard output. Further positional arguments are ignored. A path that
//! starts with `-` must follow `--`, as in `tsv-transpose -- -in.tsv`. Set `RUST_LOG=tsv_transpose=debug` to log table
//! statistics to standard error.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use tsv_transpose::config::DEFAULT_BUFFER_SIZE;
use tsv_transpose::{InputSource, LineEnding, OutputTarget, TransposeConfig, transpose_file};

/// Transpose a tab-delimited text file
#[derive(Parser, Debug)]
#[command(
    name = "tsv-transpose",
    about = "Transpose a tab-delimited text file, preserving ragged rows",
    version
)]
struct Args {
    /// Input file ("-" or omitted for standard input)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file, created or truncated (omitted for standard output)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Ignored
    #[arg(value_name = "IGNORED", hide = true)]
    extra: Vec<OsString>,

    /// I/O buffer size in bytes for both streams
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Line terminator written after each output line
    #[arg(long, value_enum, default_value = "native")]
    line_ending: LineEndingArg,
}

/// Line ending options for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineEndingArg {
    /// Platform text-mode convention
    Native,
    /// Unix `\n`
    Lf,
    /// DOS `\r\n`
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Native => LineEnding::native(),
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !args.extra.is_empty() {
        tracing::debug!(ignored = ?args.extra, "ignoring extra arguments");
    }

    let input = InputSource::from_arg(args.input.as_ref());
    let output = OutputTarget::from_arg(args.output.as_ref());
    let config = TransposeConfig::new()
        .with_buffer_size(args.buffer_size)
        .with_line_ending(args.line_ending.into());

    match transpose_file(&input, &output, &config) {
        Ok(stats) => {
            tracing::info!(
                rows = stats.rows,
                columns = stats.columns,
                retained_bytes = stats.retained_bytes(),
                "transpose complete"
            );
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("ERROR -- {err}");
            ExitCode::FAILURE
        },
    }
}
