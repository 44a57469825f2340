//! Criterion benchmarks for PeakLab hot paths.
//!
//! Benchmarks:
//! 1. Detection pass on noisy sine waves (dynamic and fixed windows)
//! 2. Detection pass on a monotonic ramp (worst case for threshold scans)
//! 3. Moving-average smoothing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use peaklab_core::data::{noisy_sine, SineSpec};
use peaklab_core::filters::{MovingAverage, SampleFilter};
use peaklab_core::{detect_extrema, DetectorConfig, WindowMode};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_signal(n: usize) -> Vec<f64> {
    let spec = SineSpec {
        len: n,
        period: 200,
        amplitude: 50.0,
        offset: 0.0,
        noise: 2.0,
    };
    noisy_sine(&spec, 42).unwrap()
}

fn config(window_mode: WindowMode) -> DetectorConfig {
    DetectorConfig {
        search_window_radius: 10,
        thresholding_enabled: true,
        threshold_value: 20.0,
        alternate_extrema: true,
        window_mode,
        ..DetectorConfig::default()
    }
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_noisy_sine");

    for n in [1_000usize, 10_000, 50_000] {
        let samples = make_signal(n);
        for mode in [WindowMode::Dynamic, WindowMode::Fixed] {
            let cfg = config(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), n),
                &samples,
                |b, samples| b.iter(|| detect_extrema(black_box(samples), &cfg)),
            );
        }
    }

    group.finish();
}

fn bench_ramp_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_ramp");

    // Saw-tooth tops and troughs are window extremes; an unreachable
    // threshold forces every scan to run to the end of the sequence.
    for n in [500usize, 2_000] {
        let samples: Vec<f64> = (0..n).map(|i| (i % 50) as f64).collect();
        let cfg = DetectorConfig {
            search_window_radius: 1,
            threshold_value: 1e9,
            window_mode: WindowMode::Fixed,
            ..DetectorConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &samples, |b, samples| {
            b.iter(|| detect_extrema(black_box(samples), &cfg))
        });
    }

    group.finish();
}

fn bench_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");
    let samples = make_signal(100_000);

    for window in [3i64, 25, 250] {
        let filter = MovingAverage::new(window).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(window), &samples, |b, samples| {
            b.iter(|| filter.apply(black_box(samples)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_detect, bench_ramp_worst_case, bench_smoothing);
criterion_main!(benches);
