//! PeakLab Core: noise-tolerant local extrema detection for sampled signals.
//!
//! This crate contains:
//! - Domain types (extremum kinds, points, detection results)
//! - The detection engine: dynamic/fixed search windows, threshold
//!   confirmation scans, alternation enforcement
//! - A causal moving-average pre-filter
//! - A wrap-around detector for cyclic-range values
//! - Sample sources (CSV, demo series, synthetic signals), TOML analysis
//!   configs and schema-versioned reports

pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod filters;
pub mod report;
pub mod wrap;

pub use config::AnalysisConfig;
pub use domain::{ExtremaResult, ExtremaType, ExtremumPoint};
pub use engine::{detect_extrema, DetectorConfig, EdgePolicy, ExtremaDetector, WindowMode};
pub use error::ConfigError;
pub use filters::smooth;
pub use wrap::{WrapAroundDetector, WrapType};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: public types are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<ExtremaDetector>();
        require_sync::<ExtremaDetector>();
        require_send::<DetectorConfig>();
        require_sync::<DetectorConfig>();
        require_send::<ExtremaResult>();
        require_sync::<ExtremaResult>();
        require_send::<engine::PointDecision>();
        require_sync::<engine::PointDecision>();
        require_send::<WrapAroundDetector>();
        require_sync::<WrapAroundDetector>();
        require_send::<filters::MovingAverage>();
        require_sync::<filters::MovingAverage>();
        require_send::<report::DetectionReport>();
        require_sync::<report::DetectionReport>();
        require_send::<AnalysisConfig>();
        require_sync::<AnalysisConfig>();
    }

    /// The engine never mutates its input: `detect` borrows the samples
    /// immutably, so a caller's slice is identical before and after.
    #[test]
    fn detect_leaves_samples_untouched() {
        let samples = vec![0.0, 2.0, 1.0, 3.0, 0.5, 4.0, 0.0];
        let before = samples.clone();
        let mut detector = ExtremaDetector::new();
        detector.enable_thresholding(false);
        detector.detect(&samples);
        assert_eq!(samples, before);
    }
}
