//! The detection pass and the stateful detector wrapper.

use super::config::{DetectorConfig, EdgePolicy, WindowMode};
use super::decision::{evaluate_point, PointDecision, PointOutcome, RejectReason};
use crate::domain::{ExtremaResult, ExtremumPoint};
use crate::error::{require_positive, ConfigError};
use log::{debug, trace};

/// Detect extrema in `samples` with `config`.
///
/// Pure function of its inputs: the last-extremum cursor starts at the
/// sentinel on every call. Worst case is O(N²) because each candidate may
/// scan to both ends of the sequence.
pub fn detect_extrema(samples: &[f64], config: &DetectorConfig) -> ExtremaResult {
    run_pass(samples, config, |_| {})
}

/// Same as [`detect_extrema`], also returning one decision per sample.
pub fn trace_extrema(samples: &[f64], config: &DetectorConfig) -> (ExtremaResult, Vec<PointDecision>) {
    let mut decisions = Vec::with_capacity(samples.len());
    let result = run_pass(samples, config, |d| decisions.push(d));
    (result, decisions)
}

fn run_pass(
    samples: &[f64],
    config: &DetectorConfig,
    mut on_decision: impl FnMut(PointDecision),
) -> ExtremaResult {
    let mut result = ExtremaResult::new();
    let mut last = ExtremumPoint::SENTINEL;

    for index in 0..samples.len() {
        let outcome = evaluate_point(samples, index, last, config);
        match outcome {
            PointOutcome::Confirmed { kind } => {
                result.push(index, kind);
                last = ExtremumPoint::new(index, kind);
            }
            PointOutcome::Rejected { reason } => {
                if reason != RejectReason::NotWindowExtreme {
                    trace!("sample {index} rejected: {reason:?}");
                }
            }
        }
        on_decision(PointDecision { index, outcome });
    }

    debug!(
        "detection pass: n={} radius={} thresholding={} threshold={} mode={:?} -> {} maxima, {} minima",
        samples.len(),
        config.search_window_radius,
        config.thresholding_enabled,
        config.threshold_value,
        config.window_mode,
        result.maxima().len(),
        result.minima().len(),
    );
    result
}

/// Stateful detector: owns a configuration and the result of its last run.
///
/// Not meant to be shared across threads while detecting; `detect` takes
/// `&mut self`, so the borrow checker serializes calls.
#[derive(Debug, Clone, Default)]
pub struct ExtremaDetector {
    config: DetectorConfig,
    last_result: ExtremaResult,
}

impl ExtremaDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a detector from a full configuration, validating it first.
    pub fn with_config(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            last_result: ExtremaResult::new(),
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Fails with `InvalidConfiguration` when `radius <= 0`; the previous
    /// radius is kept in that case.
    pub fn set_search_window_radius(&mut self, radius: i64) -> Result<(), ConfigError> {
        self.config.search_window_radius = require_positive("search_window_radius", radius)?;
        Ok(())
    }

    pub fn search_window_radius(&self) -> usize {
        self.config.search_window_radius
    }

    pub fn enable_thresholding(&mut self, enabled: bool) {
        self.config.thresholding_enabled = enabled;
    }

    /// Any value is accepted, including zero and negatives.
    pub fn set_threshold_value(&mut self, value: f64) {
        self.config.threshold_value = value;
    }

    pub fn enforce_alternate_extrema(&mut self, enforce: bool) {
        self.config.alternate_extrema = enforce;
    }

    pub fn set_window_mode(&mut self, mode: WindowMode) {
        self.config.window_mode = mode;
    }

    pub fn set_edge_policy(&mut self, policy: EdgePolicy) {
        self.config.edge_policy = policy;
    }

    /// Run a detection pass, replacing the cached result.
    pub fn detect(&mut self, samples: &[f64]) -> &ExtremaResult {
        self.last_result = detect_extrema(samples, &self.config);
        &self.last_result
    }

    /// Run a detection pass and keep the per-sample decisions.
    pub fn detect_with_trace(&mut self, samples: &[f64]) -> (&ExtremaResult, Vec<PointDecision>) {
        let (result, decisions) = trace_extrema(samples, &self.config);
        self.last_result = result;
        (&self.last_result, decisions)
    }

    /// Result of the most recent `detect` call (empty before the first one).
    pub fn last_result(&self) -> &ExtremaResult {
        &self.last_result
    }

    pub fn maxima(&self) -> &[usize] {
        self.last_result.maxima()
    }

    pub fn minima(&self) -> &[usize] {
        self.last_result.minima()
    }
}
