//! Analysis configuration file: detector parameters plus optional smoothing.
//!
//! ```toml
//! [detector]
//! search_window_radius = 5
//! thresholding_enabled = true
//! threshold_value = 20.0
//! alternate_extrema = false
//! window_mode = "dynamic"
//! edge_policy = "reject"
//!
//! [smoothing]
//! window_size = 3
//! ```

use crate::engine::DetectorConfig;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Moving-average pre-smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    pub window_size: usize,
}

/// Complete description of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub detector: DetectorConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<SmoothingConfig>,
}

impl AnalysisConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigFileError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.detector.validate()?;
        if let Some(smoothing) = self.smoothing {
            if smoothing.window_size == 0 {
                return Err(ConfigError::non_positive("window_size", 0));
            }
        }
        Ok(())
    }

    /// Smoothing window, if smoothing is configured.
    pub fn smoothing_window(&self) -> Option<usize> {
        self.smoothing.map(|s| s.window_size)
    }
}
