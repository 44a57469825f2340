//! Extrema detection engine.
//!
//! One left-to-right pass over an immutable sample slice. For every index the
//! engine builds a search window, checks whether the sample is the window's
//! extreme, applies the alternation gate, and (when thresholding is enabled)
//! confirms the candidate by scanning outward on both sides:
//!
//! 1. `CheckExtremeInWindow`: sample vs. captured window max/min
//! 2. `CheckLeftThreshold`: scan `i-1 ..= 0`
//! 3. `CheckRightThreshold`: scan `i+1 ..= N-1`
//! 4. `Confirmed`: record the index and move the last-extremum cursor
//!
//! The last-extremum cursor is a local accumulator of each pass; nothing but
//! the configuration and the cached result survives between calls.

pub mod config;
pub mod decision;
pub mod detector;
pub mod window;

pub use config::{DetectorConfig, EdgePolicy, WindowMode};
pub use decision::{evaluate_point, PointDecision, PointOutcome, RejectReason, Side};
pub use detector::{detect_extrema, trace_extrema, ExtremaDetector};
pub use window::SearchWindow;
