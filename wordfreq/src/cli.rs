// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::{WordCounter, ensure_regular_file};
use crate::error::WordCountError;
use crate::logging::{self, DEFAULT_CONFIG_FILE};
use crate::models::CountOptions;

#[derive(Parser, Debug)]
#[command(author, version, about = "Count word frequencies in a text file", long_about = None)]
pub struct Args {
    /// Path to the input text file
    pub file_path: Option<PathBuf>,

    /// Do not count tokens that contain no letters or digits
    #[arg(short, long)]
    pub skip_empty: bool,

    /// Only print the N most frequent words
    #[arg(short = 't', long, value_name = "N")]
    pub top: Option<usize>,

    /// Logging configuration file (YAML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub log_config: PathBuf,
}

/// Runs the word count described by `args`, writing the report to stdout.
///
/// # Errors
///
/// See [`run_to`].
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(args, &mut out)
}

/// Runs the word count described by `args`, writing the report to `out`.
///
/// # Errors
///
/// This function may return an error if:
/// * No file path was given ([`WordCountError::MissingArgument`])
/// * The path is not an existing regular file
/// * The file cannot be read
/// * Writing to `out` fails
pub fn run_to<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let path = args.file_path.ok_or(WordCountError::MissingArgument)?;
    let logger = logging::init(&args.log_config);

    writeln!(out, "file_input: {}", path.display())?;
    ensure_regular_file(&path)?;
    writeln!(out, "{} exists", path.display())?;

    let counter = WordCounter::new(logger.as_ref())
        .with_options(CountOptions::new().skip_empty(args.skip_empty));
    word_count(&counter, &path, args.top, out)
}

/// Counts the words in `path` and writes one `<word>: <count>` line per entry.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or `out` cannot be written.
pub fn word_count<W: Write>(
    counter: &WordCounter<'_>,
    path: &Path,
    top: Option<usize>,
    out: &mut W,
) -> Result<()> {
    let entries = counter
        .count_file(path)
        .with_context(|| format!("Failed to count words in file: {}", path.display()))?;

    let limit = top.unwrap_or(entries.len());
    for entry in entries.iter().take(limit) {
        writeln!(out, "{entry}")?;
    }
    out.flush()?;

    Ok(())
}
