//! Configuration error type shared by the engine and the smoothing filter.

use thiserror::Error;

/// Raised synchronously by setters and constructors when a documented
/// precondition is violated. The previous configuration is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {parameter} must be > 0 (got {value})")]
    InvalidConfiguration {
        parameter: &'static str,
        value: i64,
    },
    #[error("invalid configuration: {parameter} must be finite (got {value})")]
    NonFinite {
        parameter: &'static str,
        value: f64,
    },
}

impl ConfigError {
    pub(crate) fn non_positive(parameter: &'static str, value: i64) -> Self {
        Self::InvalidConfiguration { parameter, value }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { parameter, .. } | Self::NonFinite { parameter, .. } => parameter,
        }
    }
}

/// Check that an integer parameter is strictly positive and convert it to `usize`.
pub(crate) fn require_positive(parameter: &'static str, value: i64) -> Result<usize, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::non_positive(parameter, value));
    }
    usize::try_from(value).map_err(|_| ConfigError::non_positive(parameter, value))
}

pub(crate) fn require_finite(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { parameter, value });
    }
    Ok(value)
}
