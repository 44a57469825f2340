//! Property tests for detection and smoothing invariants.
//!
//! Uses proptest to verify:
//! 1. Ordering: maxima and minima are each strictly increasing
//! 2. Disjointness: no index is both a maximum and a minimum
//! 3. Bounds: every index lies in [0, N-1]; count matches list lengths
//! 4. Alternation: with enforcement on, interleaved kinds never repeat
//! 5. Determinism: same input and config, same result
//! 6. Smoothing: same length as input, constants preserved, outputs bounded
//!    by the input and independent of samples outside their window

use peaklab_core::engine::trace_extrema;
use peaklab_core::{detect_extrema, smooth, DetectorConfig, EdgePolicy, WindowMode};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_samples() -> impl Strategy<Value = Vec<f64>> {
    // Coarse values produce plenty of ties and plateaus.
    prop::collection::vec((-50i32..50).prop_map(|v| v as f64 / 2.0), 0..120)
}

fn arb_config() -> impl Strategy<Value = DetectorConfig> {
    (
        1usize..12,
        any::<bool>(),
        -2.0..15.0_f64,
        any::<bool>(),
        prop_oneof![Just(WindowMode::Dynamic), Just(WindowMode::Fixed)],
        prop_oneof![Just(EdgePolicy::Reject), Just(EdgePolicy::Allow)],
    )
        .prop_map(
            |(radius, thresholding, threshold, alternate, window_mode, edge_policy)| DetectorConfig {
                search_window_radius: radius,
                thresholding_enabled: thresholding,
                threshold_value: threshold,
                alternate_extrema: alternate,
                window_mode,
                edge_policy,
            },
        )
}

fn strictly_increasing(v: &[usize]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

// ── 1–3. Ordering, disjointness, bounds ──────────────────────────────

proptest! {
    #[test]
    fn result_lists_are_sorted_disjoint_and_bounded(
        samples in arb_samples(),
        config in arb_config(),
    ) {
        let r = detect_extrema(&samples, &config);
        prop_assert!(strictly_increasing(r.maxima()));
        prop_assert!(strictly_increasing(r.minima()));
        for i in r.maxima() {
            prop_assert!(!r.minima().contains(i));
        }
        let n = samples.len();
        prop_assert!(r.maxima().iter().chain(r.minima()).all(|&i| i < n));
        prop_assert_eq!(r.count(), r.maxima().len() + r.minima().len());
        if n == 0 {
            prop_assert!(r.is_empty());
        }
    }

    /// Boundary samples never survive thresholding, whatever the edge policy.
    #[test]
    fn thresholding_never_confirms_boundaries(
        samples in arb_samples(),
        mut config in arb_config(),
    ) {
        config.thresholding_enabled = true;
        let r = detect_extrema(&samples, &config);
        if let Some(last) = samples.len().checked_sub(1) {
            for edge in [0, last] {
                prop_assert!(!r.maxima().contains(&edge));
                prop_assert!(!r.minima().contains(&edge));
            }
        }
    }
}

// ── 4. Alternation ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn alternation_enforced(
        samples in arb_samples(),
        mut config in arb_config(),
    ) {
        config.alternate_extrema = true;
        let r = detect_extrema(&samples, &config);
        let points = r.points();
        for pair in points.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }
}

// ── 5. Determinism ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn detection_is_deterministic(
        samples in arb_samples(),
        config in arb_config(),
    ) {
        let first = detect_extrema(&samples, &config);
        let second = detect_extrema(&samples, &config);
        prop_assert_eq!(&first, &second);

        let (traced, decisions) = trace_extrema(&samples, &config);
        prop_assert_eq!(&first, &traced);
        prop_assert_eq!(decisions.len(), samples.len());
        let confirmed = decisions.iter().filter(|d| d.outcome.is_confirmed()).count();
        prop_assert_eq!(confirmed, first.count());
    }
}

// ── 6. Smoothing ─────────────────────────────────────────────────────

/// Mostly small values with occasional huge ones.
fn arb_wide_sample() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1e3..1e3_f64,
        1 => -1e16..1e16_f64,
    ]
}

proptest! {
    #[test]
    fn smoothing_preserves_length(
        samples in prop::collection::vec(-1e3..1e3_f64, 0..200),
        window in 1i64..40,
    ) {
        let out = smooth(&samples, window).unwrap();
        prop_assert_eq!(out.len(), samples.len());
    }

    #[test]
    fn smoothing_constant_is_identity(
        value in -1e6..1e6_f64,
        len in 0usize..200,
        window in 1i64..64,
    ) {
        let samples = vec![value; len];
        let out = smooth(&samples, window).unwrap();
        prop_assert_eq!(out.len(), len);
        let tolerance = 1e-9 * value.abs().max(1.0);
        for v in out {
            prop_assert!((v - value).abs() <= tolerance, "got {v}, expected {value}");
        }
    }

    #[test]
    fn smoothing_stays_within_input_range(
        samples in prop::collection::vec(arb_wide_sample(), 1..200),
        window in 1i64..40,
    ) {
        let lo = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let tolerance = 1e-9 * lo.abs().max(hi.abs()).max(1.0);
        for v in smooth(&samples, window).unwrap() {
            prop_assert!(v >= lo - tolerance && v <= hi + tolerance, "{v} outside [{lo}, {hi}]");
        }
    }

    #[test]
    fn smoothing_forgets_samples_outside_the_window(
        samples in prop::collection::vec(arb_wide_sample(), 1..200),
        cut in 0usize..200,
        window in 1usize..40,
    ) {
        let cut = cut.min(samples.len() - 1);
        let full = smooth(&samples, window as i64).unwrap();
        let tail = smooth(&samples[cut..], window as i64).unwrap();
        for i in (cut + window - 1)..samples.len() {
            prop_assert_eq!(full[i], tail[i - cut], "index {}", i);
        }
    }
}
