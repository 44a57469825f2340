//! Domain types for PeakLab: extremum kinds, points, and detection results.

pub mod extremum;
pub mod result;

pub use extremum::{ExtremaType, ExtremumPoint};
pub use result::ExtremaResult;
