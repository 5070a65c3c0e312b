// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a run. Each kind maps to a user-facing message and an exit code.
#[derive(Debug, Error)]
pub enum WordCountError {
    #[error("no input file path was supplied")]
    MissingArgument,

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordCountError {
    /// Message printed to stdout for this kind of failure.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingArgument | Self::InvalidArguments(_) => {
                "Please provide absolute path of the input file. For example 'wordfreq /home/user/input.txt'"
            }
            Self::NotFound(_) | Self::NotAFile(_) => {
                "Given file path is incorrect. Please provide the correct path."
            }
            Self::Io { .. } => "Could not read the given file.",
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArgument
            | Self::InvalidArguments(_)
            | Self::NotFound(_)
            | Self::NotAFile(_)
            | Self::Io { .. } => 1,
        }
    }
}

/// Problems with the optional logging configuration. These never abort a run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read logging config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse logging config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("unknown log level '{0}'")]
    InvalidLevel(String),
}
