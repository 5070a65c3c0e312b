// src/core/counter.rs
use log::{Level, Log, Record};
use std::fs;
use std::io;
use std::path::Path;

use crate::core::normalize::normalize_token;
use crate::error::WordCountError;
use crate::models::{CountOptions, WordCount, WordCountTable};

/// Log target used for the per-word report records.
pub const LOG_TARGET: &str = "word_count";

/// Checks that `path` names an existing regular file.
///
/// # Errors
///
/// * [`WordCountError::NotFound`] if nothing exists at `path`
/// * [`WordCountError::NotAFile`] if `path` is a directory or other non-regular file
/// * [`WordCountError::Io`] if the metadata cannot be read
pub fn ensure_regular_file(path: &Path) -> Result<(), WordCountError> {
    let metadata = fs::metadata(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WordCountError::NotFound(path.to_path_buf())
        } else {
            WordCountError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if !metadata.is_file() {
        return Err(WordCountError::NotAFile(path.to_path_buf()));
    }

    Ok(())
}

/// Counts normalized words in a single file and reports them by descending frequency.
///
/// The logger is borrowed rather than taken from the global `log` facade so callers
/// decide where the report side channel goes.
pub struct WordCounter<'a> {
    logger: &'a dyn Log,
    options: CountOptions,
}

impl<'a> WordCounter<'a> {
    #[inline]
    #[must_use]
    pub fn new(logger: &'a dyn Log) -> Self {
        Self {
            logger,
            options: CountOptions::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_options(mut self, options: CountOptions) -> Self {
        self.options = options;
        self
    }

    /// Reads the whole file at `path` into memory.
    ///
    /// # Errors
    ///
    /// * [`WordCountError::NotFound`] if nothing exists at `path`
    /// * [`WordCountError::NotAFile`] if `path` is a directory or other non-regular file
    /// * [`WordCountError::Io`] if the file cannot be opened or is not valid UTF-8
    pub fn load(path: &Path) -> Result<String, WordCountError> {
        ensure_regular_file(path)?;
        fs::read_to_string(path).map_err(|source| WordCountError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Splits `content` on whitespace and counts each normalized token.
    #[must_use]
    pub fn tokenize_and_count(&self, content: &str) -> WordCountTable {
        let mut table = WordCountTable::new();
        for token in content.split_whitespace() {
            let word = normalize_token(token);
            if word.is_empty() && self.options.skip_empty {
                continue;
            }
            table.increment(&word);
        }
        table
    }

    /// Orders entries by count, highest first. Equal counts stay in first-seen order.
    ///
    /// Every entry is also written to the logger at `info` level.
    #[must_use]
    pub fn render_sorted(&self, table: WordCountTable) -> Vec<WordCount> {
        let mut entries = table.into_entries();
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        for entry in &entries {
            self.logger.log(
                &Record::builder()
                    .args(format_args!("{entry}"))
                    .level(Level::Info)
                    .target(LOG_TARGET)
                    .module_path_static(Some(module_path!()))
                    .file_static(Some(file!()))
                    .build(),
            );
        }

        entries
    }

    /// Runs load, count and sort for one file.
    ///
    /// # Errors
    ///
    /// Returns the error from [`WordCounter::load`].
    pub fn count_file(&self, path: &Path) -> Result<Vec<WordCount>, WordCountError> {
        let content = Self::load(path)?;
        let table = self.tokenize_and_count(&content);
        Ok(self.render_sorted(table))
    }
}
