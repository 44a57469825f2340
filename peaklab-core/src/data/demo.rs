//! Built-in demo series: a slowly rising, noisy sensor trace with one sharp
//! dip and a late spike. Handy for trying detector settings without a file.

pub const DEMO_SERIES: [f64; 41] = [
    18.0, 20.0, 21.0, 23.0, 26.0, 28.0, 30.0, 31.0, 32.0, 31.0, 29.0, 27.0, 25.0, 24.0, 22.0,
    21.0, 16.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 24.0, 26.0, 27.0, 27.0, 27.0, 28.0, 29.0,
    30.0, 33.0, 29.0, 29.0, 29.0, 34.0, 35.0, 37.0, 31.0, 20.0, 19.0,
];

pub fn demo_series() -> Vec<f64> {
    DEMO_SERIES.to_vec()
}
