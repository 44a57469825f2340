//! Causal moving average (equal-weight FIR).
//!
//! Output k is the mean of `samples[k-w+1..=k]`. The first `w-1` outputs
//! average over the samples available so far, so a constant input comes
//! back unchanged. A NaN or infinite sample only affects the windows that
//! contain it.

use super::SampleFilter;
use crate::error::{require_positive, ConfigError};

#[derive(Debug, Clone)]
pub struct MovingAverage {
    window_size: usize,
    name: String,
}

impl MovingAverage {
    /// Fails with `InvalidConfiguration` when `window_size <= 0`.
    pub fn new(window_size: i64) -> Result<Self, ConfigError> {
        let window_size = require_positive("window_size", window_size)?;
        Ok(Self {
            window_size,
            name: format!("moving_average_{window_size}"),
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }
}

impl SampleFilter for MovingAverage {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, samples: &[f64]) -> Vec<f64> {
        let w = self.window_size;
        // Summed per window: no output may depend on a sample outside it.
        (0..samples.len())
            .map(|i| {
                let window = &samples[(i + 1).saturating_sub(w)..=i];
                window.iter().sum::<f64>() / window.len() as f64
            })
            .collect()
    }
}

/// Smooth `samples` with a moving average of `window_size` samples.
pub fn smooth(samples: &[f64], window_size: i64) -> Result<Vec<f64>, ConfigError> {
    Ok(MovingAverage::new(window_size)?.apply(samples))
}
