use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
///
/// Only the fatal listing calls produce these. Per-entry failures inside a
/// scan are skipped where they happen and never surface here.
#[derive(Error, Debug)]
pub enum DuError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(String),
}

impl DuError {
    /// Wrap an IO error for `path`, mapping a missing path to `PathNotFound`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DuError::PathNotFound(path)
        } else {
            DuError::Io { path, source }
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DuError>;
