//! Search window bounds and captured extremes.

use super::config::WindowMode;
use crate::domain::ExtremumPoint;

/// Inclusive index range `[start, end]` evaluated for one sample, with the
/// maximum and minimum captured before any threshold scan runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWindow {
    pub start: usize,
    pub end: usize,
    pub max: f64,
    pub min: f64,
}

impl SearchWindow {
    /// Build the window for sample `index`.
    ///
    /// The right edge is clipped to the last sample instead of failing. In
    /// dynamic mode the left edge is the last confirmed extremum (the sentinel
    /// clamps to 0); in fixed mode it is `index - radius`, clamped to 0.
    ///
    /// `index` must be a valid position in `samples`.
    pub fn around(
        samples: &[f64],
        index: usize,
        last: ExtremumPoint,
        radius: usize,
        mode: WindowMode,
    ) -> Self {
        let last_index = samples.len().saturating_sub(1);
        let start = match mode {
            WindowMode::Dynamic => last.window_start().min(index),
            WindowMode::Fixed => index.saturating_sub(radius),
        };
        let end = index.saturating_add(radius).min(last_index);

        let slice = &samples[start..=end];
        let max = slice.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = slice.iter().copied().fold(f64::INFINITY, f64::min);

        Self {
            start,
            end,
            max,
            min,
        }
    }

    /// Number of samples covered, always at least one.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}
