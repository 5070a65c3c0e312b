// src/models/logging_config.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top level of `logging.yml`. Only the `logging` section is read.
#[derive(Deserialize, Debug, Default)]
pub struct LoggingFile {
    pub logging: Option<LoggingConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub root: Option<LevelSpec>,
    #[serde(default)]
    pub loggers: BTreeMap<String, LevelSpec>,
    #[serde(default)]
    pub stream: Stream,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    pub level: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[default]
    Stderr,
    Stdout,
}
