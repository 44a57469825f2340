//! Per-point decision procedure.
//!
//! Each sample walks a small state machine. States only move forward; the
//! two terminal states carry the outcome.

use super::config::{DetectorConfig, EdgePolicy};
use super::window::SearchWindow;
use crate::domain::{ExtremaType, ExtremumPoint};
use serde::{Deserialize, Serialize};

/// Which side of a candidate a threshold scan was walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Why a sample was not confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// Sample equals neither the window maximum nor the window minimum.
    NotWindowExtreme,
    NotANumber,
    /// Same kind as the previous confirmed extremum under alternation.
    AlternationViolated,
    /// Index 0 or N-1 under `EdgePolicy::Reject`.
    EdgeSample,
    NoLeftNeighbor,
    NoRightNeighbor,
    /// A scanned sample went beyond the captured window extreme.
    ExceedsWindowExtreme { side: Side },
    /// The scan reached the end of the sequence without a large enough swing.
    ThresholdNotReached { side: Side },
}

/// Terminal outcome for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PointOutcome {
    Confirmed { kind: ExtremaType },
    Rejected { reason: RejectReason },
}

impl PointOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}

/// Outcome for a single index of a detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDecision {
    pub index: usize,
    pub outcome: PointOutcome,
}

/// A sample that matched its window extreme, with that extreme captured.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    kind: ExtremaType,
    window_extreme: f64,
}

#[derive(Debug, Clone, Copy)]
enum PointState {
    CheckExtremeInWindow,
    CheckLeftThreshold(Candidate),
    CheckRightThreshold(Candidate),
    Confirmed(ExtremaType),
    Rejected(RejectReason),
}

/// Run the decision procedure for `samples[index]`.
///
/// `last` is the most recent confirmed extremum of the current pass, or the
/// sentinel. It drives both the dynamic window edge and the alternation gate.
/// `index` must be a valid position in `samples`.
pub fn evaluate_point(
    samples: &[f64],
    index: usize,
    last: ExtremumPoint,
    config: &DetectorConfig,
) -> PointOutcome {
    let mut state = PointState::CheckExtremeInWindow;
    loop {
        state = match state {
            PointState::CheckExtremeInWindow => check_extreme_in_window(samples, index, last, config),
            PointState::CheckLeftThreshold(candidate) => {
                if index == 0 {
                    PointState::Rejected(RejectReason::NoLeftNeighbor)
                } else {
                    match scan_side(samples, index, candidate, config.threshold_value, Side::Left) {
                        Ok(()) => PointState::CheckRightThreshold(candidate),
                        Err(reason) => PointState::Rejected(reason),
                    }
                }
            }
            PointState::CheckRightThreshold(candidate) => {
                if index + 1 == samples.len() {
                    PointState::Rejected(RejectReason::NoRightNeighbor)
                } else {
                    match scan_side(samples, index, candidate, config.threshold_value, Side::Right) {
                        Ok(()) => PointState::Confirmed(candidate.kind),
                        Err(reason) => PointState::Rejected(reason),
                    }
                }
            }
            PointState::Confirmed(kind) => return PointOutcome::Confirmed { kind },
            PointState::Rejected(reason) => return PointOutcome::Rejected { reason },
        };
    }
}

fn check_extreme_in_window(
    samples: &[f64],
    index: usize,
    last: ExtremumPoint,
    config: &DetectorConfig,
) -> PointState {
    let value = samples[index];
    if value.is_nan() {
        return PointState::Rejected(RejectReason::NotANumber);
    }

    let window = SearchWindow::around(
        samples,
        index,
        last,
        config.search_window_radius,
        config.window_mode,
    );

    // Maxima wins when the whole window is flat.
    let candidate = if value == window.max {
        Candidate {
            kind: ExtremaType::Maxima,
            window_extreme: window.max,
        }
    } else if value == window.min {
        Candidate {
            kind: ExtremaType::Minima,
            window_extreme: window.min,
        }
    } else {
        return PointState::Rejected(RejectReason::NotWindowExtreme);
    };

    if config.alternate_extrema && candidate.kind == last.kind {
        return PointState::Rejected(RejectReason::AlternationViolated);
    }

    let is_edge = index == 0 || index + 1 == samples.len();
    if is_edge && config.edge_policy == EdgePolicy::Reject {
        return PointState::Rejected(RejectReason::EdgeSample);
    }

    if !config.thresholding_enabled {
        return PointState::Confirmed(candidate.kind);
    }
    PointState::CheckLeftThreshold(candidate)
}

/// Walk away from `index` until a sample confirms the swing, a sample beats
/// the captured window extreme, or the sequence ends.
fn scan_side(
    samples: &[f64],
    index: usize,
    candidate: Candidate,
    threshold: f64,
    side: Side,
) -> Result<(), RejectReason> {
    match side {
        Side::Left => scan(samples, index, (0..index).rev(), candidate, threshold, side),
        Side::Right => scan(samples, index, index + 1..samples.len(), candidate, threshold, side),
    }
}

fn scan(
    samples: &[f64],
    index: usize,
    neighbors: impl Iterator<Item = usize>,
    candidate: Candidate,
    threshold: f64,
    side: Side,
) -> Result<(), RejectReason> {
    let value = samples[index];
    for j in neighbors {
        let other = samples[j];
        let (exceeds, swing) = match candidate.kind {
            ExtremaType::Maxima => (other > candidate.window_extreme, value - other),
            ExtremaType::Minima => (other < candidate.window_extreme, other - value),
            ExtremaType::None => return Err(RejectReason::NotWindowExtreme),
        };
        if exceeds {
            return Err(RejectReason::ExceedsWindowExtreme { side });
        }
        if swing >= threshold {
            return Ok(());
        }
    }
    Err(RejectReason::ThresholdNotReached { side })
}
