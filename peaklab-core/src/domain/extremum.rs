use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a confirmed (or candidate) extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremaType {
    #[default]
    None,
    Maxima,
    Minima,
}

impl ExtremaType {
    /// The opposite kind. `None` has no opposite.
    pub fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Maxima => Self::Minima,
            Self::Minima => Self::Maxima,
        }
    }
}

impl fmt::Display for ExtremaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Maxima => "maxima",
            Self::Minima => "minima",
        };
        f.write_str(s)
    }
}

/// A point in the sample sequence together with its extremum kind.
///
/// The default value `{index: -1, kind: None}` is the "no prior extremum"
/// sentinel that seeds every detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtremumPoint {
    pub index: i64,
    pub kind: ExtremaType,
}

impl ExtremumPoint {
    pub const SENTINEL: Self = Self {
        index: -1,
        kind: ExtremaType::None,
    };

    pub fn new(index: usize, kind: ExtremaType) -> Self {
        Self {
            index: index as i64,
            kind,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.index < 0
    }

    /// Index usable as a window edge: the sentinel clamps to the sequence start.
    pub fn window_start(&self) -> usize {
        usize::try_from(self.index).unwrap_or(0)
    }
}

impl Default for ExtremumPoint {
    fn default() -> Self {
        Self::SENTINEL
    }
}
