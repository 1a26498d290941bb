//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up a sink
///
/// These never reach a logging call site. `FileSink::open` hands them back
/// as a diagnostic alongside the (degraded) sink.
#[derive(Error, Debug)]
pub enum LogError {
    /// The user's home directory could not be determined
    #[error("could not determine the home directory")]
    NoHomeDirectory,

    #[error("{source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    /// Path the failed operation targeted, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            LogError::NoHomeDirectory => None,
            LogError::CreateDirectory { path, .. } | LogError::CreateFile { path, .. } => Some(path),
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

/// A message template did not match its arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("placeholder {{{index}}} has no argument ({count} supplied)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("invalid placeholder at byte {position}")]
    InvalidPlaceholder { position: usize },

    #[error("unbalanced brace at byte {position}")]
    UnbalancedBrace { position: usize },
}

/// Errors that can occur while loading logging configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
