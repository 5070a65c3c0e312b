// src/models.rs
pub mod count_options;
pub mod logging_config;
pub mod word_count;
pub mod word_count_table;

pub use count_options::CountOptions;
pub use logging_config::{LevelSpec, LoggingConfig, LoggingFile, Stream};
pub use word_count::WordCount;
pub use word_count_table::WordCountTable;
