//! Deterministic noisy sine waves for demos, tests and benchmarks.

use crate::error::{require_finite, require_positive, ConfigError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SineSpec {
    pub len: usize,
    /// Samples per full cycle.
    pub period: i64,
    pub amplitude: f64,
    pub offset: f64,
    /// Half-width of the uniform noise added to each sample.
    pub noise: f64,
}

impl Default for SineSpec {
    fn default() -> Self {
        Self {
            len: 500,
            period: 100,
            amplitude: 10.0,
            offset: 0.0,
            noise: 1.0,
        }
    }
}

/// `offset + amplitude * sin(2πi / period) + U(-noise, noise)`, same seed same series.
///
/// Fails when `period <= 0` or `noise` is not finite.
pub fn noisy_sine(spec: &SineSpec, seed: u64) -> Result<Vec<f64>, ConfigError> {
    let period = require_positive("period", spec.period)? as f64;
    let noise = require_finite("noise", spec.noise)?.abs();
    let mut rng = StdRng::seed_from_u64(seed);

    Ok((0..spec.len)
        .map(|i| {
            let clean = spec.offset + spec.amplitude * (TAU * i as f64 / period).sin();
            let jitter = if noise > 0.0 {
                rng.gen_range(-noise..=noise)
            } else {
                0.0
            };
            clean + jitter
        })
        .collect())
}
