use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::scanner::ScanOptions;

/// Largest worker count a config file may request.
pub const MAX_CONFIGURED_THREADS: usize = 256;

/// Largest progress interval a config file may request, in milliseconds.
pub const MAX_PROGRESS_INTERVAL_MS: u64 = 60_000;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Include hidden entries without passing -a
    pub show_hidden: bool,
    /// Number of parallel workers (0 = auto)
    pub parallel_threads: usize,
    /// Minimum spacing between progress updates, in milliseconds
    pub progress_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Show the transient progress line while scanning
    pub progress: bool,
    /// Print JSON instead of text
    pub json: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            parallel_threads: 0,
            progress_interval_ms: 100,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            progress: true,
            json: false,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the file at
    /// [`Config::default_path`] is used if present, else the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError { path, source: e })?;

        config.validate()?;

        Ok(config)
    }

    /// `<config_dir>/rusty-du/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rusty-du").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scanner.parallel_threads > MAX_CONFIGURED_THREADS {
            return Err(ConfigError::Invalid(format!(
                "parallel_threads must be at most {}",
                MAX_CONFIGURED_THREADS
            )));
        }
        if self.scanner.progress_interval_ms > MAX_PROGRESS_INTERVAL_MS {
            return Err(ConfigError::Invalid(format!(
                "progress_interval_ms must be at most {}",
                MAX_PROGRESS_INTERVAL_MS
            )));
        }
        Ok(())
    }

    /// Scan options from this configuration, before CLI overrides.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new()
            .with_hidden(self.scanner.show_hidden)
            .with_threads(self.scanner.parallel_threads)
            .with_progress_interval(Duration::from_millis(self.scanner.progress_interval_ms))
    }
}
