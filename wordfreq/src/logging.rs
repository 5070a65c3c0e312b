// src/logging.rs
use env_logger::{Builder, Env, Target};
use log::{LevelFilter, Log};
use std::fs;
use std::path::Path;

use crate::core::LOG_TARGET;
use crate::error::ConfigError;
use crate::models::{LevelSpec, LoggingConfig, LoggingFile, Stream};

/// Looked up in the working directory when no `--log-config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "logging.yml";

/// Validated logging settings, ready to be turned into an `env_logger` builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub root: LevelFilter,
    pub targets: Vec<(String, LevelFilter)>,
    pub stream: Stream,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            root: LevelFilter::Warn,
            targets: Vec::new(),
            stream: Stream::Stderr,
        }
    }
}

impl TryFrom<&LoggingConfig> for LogSettings {
    type Error = ConfigError;

    fn try_from(config: &LoggingConfig) -> Result<Self, Self::Error> {
        let mut settings = Self {
            stream: config.stream,
            ..Self::default()
        };

        if let Some(level) = config.root.as_ref().and_then(|r| r.level.as_deref()) {
            settings.root = parse_level(level)?;
        }

        for (name, LevelSpec { level }) in &config.loggers {
            if let Some(level) = level.as_deref() {
                settings.targets.push((target_for(name), parse_level(level)?));
            }
        }

        Ok(settings)
    }
}

/// Maps a configured logger name to the `log` target it filters.
///
/// The report logger answers to any casing of its name (`WORD_COUNT` included)
/// because `env_logger` target filters are case-sensitive.
fn target_for(name: &str) -> String {
    if name.eq_ignore_ascii_case(LOG_TARGET) {
        LOG_TARGET.to_owned()
    } else {
        name.to_owned()
    }
}

/// Parses a level name. Python-style names (`WARNING`, `CRITICAL`, `NOTSET`) are
/// accepted next to the `log` crate's own, case-insensitively.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLevel`] for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "notset" | "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warning" | "warn" => Ok(LevelFilter::Warn),
        "error" | "critical" | "fatal" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        _ => Err(ConfigError::InvalidLevel(level.to_owned())),
    }
}

/// Reads the logging configuration at `path`.
///
/// A missing file, an empty document, or a document without a `logging`
/// section all yield the default settings.
///
/// # Errors
///
/// This function may return an error if:
/// * The file exists but cannot be read
/// * The file is not valid YAML or does not match the expected shape
/// * A level name is not recognised
pub fn load_settings(path: &Path) -> Result<LogSettings, ConfigError> {
    if !path.is_file() {
        return Ok(LogSettings::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(LogSettings::default());
    }

    let file: LoggingFile =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    file.logging
        .as_ref()
        .map_or_else(|| Ok(LogSettings::default()), LogSettings::try_from)
}

/// Builds an `env_logger` builder for `settings`. `RUST_LOG` still takes precedence.
#[must_use]
pub fn builder(settings: &LogSettings) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(settings.root);
    for (target, level) in &settings.targets {
        builder.filter_module(target, *level);
    }
    builder.target(match settings.stream {
        Stream::Stderr => Target::Stderr,
        Stream::Stdout => Target::Stdout,
    });
    builder.parse_env(Env::default());
    builder
}

/// Installs the process-wide logger from `path` and returns a separate handle
/// for the word counter.
///
/// Configuration problems are logged and otherwise ignored: the defaults are used.
pub fn init(path: &Path) -> Box<dyn Log> {
    let exists = path.is_file();
    let outcome = load_settings(path);
    let settings = outcome
        .as_ref()
        .map_or_else(|_| LogSettings::default(), Clone::clone);

    if builder(&settings).try_init().is_err() {
        log::debug!("a logger is already installed, keeping it");
    }

    if exists {
        log::debug!("{} exists", path.display());
    } else {
        log::debug!("{} doesn't exist", path.display());
    }

    match outcome {
        Ok(_) => log::info!("logging configured"),
        Err(err) => log::error!("{err}"),
    }

    Box::new(builder(&settings).build())
}
