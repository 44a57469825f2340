//! Detector configuration.

use crate::error::{require_positive, ConfigError};
use serde::{Deserialize, Serialize};

/// How the left edge of the search window is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Left edge pinned to the last confirmed extremum; widens across
    /// monotonic runs until the next extremum is confirmed.
    #[default]
    Dynamic,
    /// Left edge at `i - radius`, a symmetric window around each sample.
    Fixed,
}

/// What to do with candidates at index 0 and N-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Boundary samples are never confirmed.
    #[default]
    Reject,
    /// Boundary samples go through the normal decision procedure; with
    /// thresholding enabled they still fail for lack of a neighbor.
    Allow,
}

/// Parameters of a detection pass.
///
/// Defaults: radius 5, thresholding on at 20.0, no alternation, dynamic
/// window, edge samples rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub search_window_radius: usize,
    pub thresholding_enabled: bool,
    /// Minimum rise/fall required on both sides of a candidate. Zero or
    /// negative values are accepted and make the test permissive.
    pub threshold_value: f64,
    pub alternate_extrema: bool,
    pub window_mode: WindowMode,
    pub edge_policy: EdgePolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            search_window_radius: 5,
            thresholding_enabled: true,
            threshold_value: 20.0,
            alternate_extrema: false,
            window_mode: WindowMode::Dynamic,
            edge_policy: EdgePolicy::Reject,
        }
    }
}

impl DetectorConfig {
    /// Default configuration with a validated search radius.
    pub fn with_radius(radius: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            search_window_radius: require_positive("search_window_radius", radius)?,
            ..Self::default()
        })
    }

    /// Reject a zero search radius (negative radii cannot be represented).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_window_radius == 0 {
            return Err(ConfigError::non_positive("search_window_radius", 0));
        }
        Ok(())
    }
}
