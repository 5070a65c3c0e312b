//! Word frequency counting for a single text file.
//!
//! The pipeline is load, then tokenize and count, then sort by descending count.
//! [`cli::run`] wires it to the command line.
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

pub use cli::{Args, run, run_to, word_count};
pub use crate::core::{WordCounter, ensure_regular_file, normalize_token};
pub use error::{ConfigError, WordCountError};
pub use models::{CountOptions, WordCount, WordCountTable};
