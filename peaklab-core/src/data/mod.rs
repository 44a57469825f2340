//! Sample sources: CSV files, the built-in demo series, synthetic signals.

pub mod csv_source;
pub mod demo;
pub mod synthetic;

pub use csv_source::{load_samples, read_samples, Column, LoadError, SampleSource};
pub use demo::demo_series;
pub use synthetic::{noisy_sine, SineSpec};
