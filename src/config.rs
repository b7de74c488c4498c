//! Configuration for a run: grid parameters and output settings, read from TOML.
//!
//! Every field has a default, so an empty file (or no file) gives the reference
//! run over `[0, 3]` with 600 steps.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Grid, GridError, GridSettings};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Interval and step count
    #[serde(default)]
    pub grid: GridSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// How charts are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Last error sample index kept in the error chart; 0 keeps all of them.
    #[serde(default = "default_error_window")]
    pub error_window: usize,
}

fn default_error_window() -> usize {
    100
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            error_window: default_error_window(),
        }
    }
}

/// Chart serialization format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        Self::from_toml(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validated grid for this configuration.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(self.grid.grid()?)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
}
