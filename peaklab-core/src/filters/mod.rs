//! Pre-processing filters applied upstream of the detection engine.
//!
//! Filters are pure functions: sample series in, series of the same length
//! out. The engine never calls them itself; callers smooth first and hand
//! the output to `detect`.

pub mod moving_average;

pub use moving_average::{smooth, MovingAverage};

/// A pure sample-series transform.
pub trait SampleFilter: Send + Sync {
    /// Human-readable name (e.g., "moving_average_5").
    fn name(&self) -> &str;

    /// Filter the whole series. The output has the same length as `samples`.
    fn apply(&self, samples: &[f64]) -> Vec<f64>;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for filter tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
