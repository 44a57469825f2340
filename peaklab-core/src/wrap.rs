//! Wrap-around detection for values living on a cyclic range `[0, max_value)`.
//!
//! Each new value is compared with the previous one. If travelling "around
//! the end" of the range is shorter than the direct distance, the value is
//! assumed to have wrapped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapType {
    #[default]
    None,
    /// Value passed `max_value` and restarted near zero.
    ForwardWrap,
    /// Value dropped below zero and reappeared near `max_value`.
    ReverseWrap,
}

impl WrapType {
    /// Machine-readable label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ForwardWrap => "forward_wrap",
            Self::ReverseWrap => "reverse_wrap",
        }
    }
}

impl fmt::Display for WrapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "None",
            Self::ForwardWrap => "Forward Wrap",
            Self::ReverseWrap => "Reverse Wrap",
        };
        f.write_str(s)
    }
}

/// Online detector with one value of memory. The previous value starts at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapAroundDetector {
    max_value: f64,
    prev_value: f64,
    last: WrapType,
}

impl WrapAroundDetector {
    pub fn new(max_value: f64) -> Self {
        Self {
            max_value,
            prev_value: 0.0,
            last: WrapType::None,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn set_max_value(&mut self, max_value: f64) {
        self.max_value = max_value;
    }

    /// Classification returned by the most recent `update`.
    pub fn last(&self) -> WrapType {
        self.last
    }

    /// Forget the previous value (back to 0) and the last classification.
    pub fn reset(&mut self) {
        self.prev_value = 0.0;
        self.last = WrapType::None;
    }

    /// Classify the transition from the previous value to `value`.
    pub fn update(&mut self, value: f64) -> WrapType {
        let prev = self.prev_value;
        self.last = if value > prev {
            let direct = value - prev;
            let wrapped = prev + (self.max_value - value);
            if wrapped < direct {
                WrapType::ReverseWrap
            } else {
                WrapType::None
            }
        } else {
            let direct = prev - value;
            let wrapped = value + (self.max_value - prev);
            if wrapped < direct {
                WrapType::ForwardWrap
            } else {
                WrapType::None
            }
        };
        self.prev_value = value;
        self.last
    }

    /// Feed a whole series, one classification per value.
    pub fn classify(&mut self, values: &[f64]) -> Vec<WrapType> {
        values.iter().map(|&v| self.update(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_steps_do_not_wrap() {
        let mut d = WrapAroundDetector::new(360.0);
        assert_eq!(d.classify(&[10.0, 20.0, 15.0, 15.0]), vec![WrapType::None; 4]);
    }

    #[test]
    fn forward_wrap_past_max() {
        let mut d = WrapAroundDetector::new(360.0);
        d.update(350.0);
        assert_eq!(d.update(5.0), WrapType::ForwardWrap);
        assert_eq!(d.last(), WrapType::ForwardWrap);
    }

    #[test]
    fn reverse_wrap_below_zero() {
        let mut d = WrapAroundDetector::new(360.0);
        d.update(5.0);
        assert_eq!(d.update(355.0), WrapType::ReverseWrap);
    }

    #[test]
    fn first_update_compares_against_zero() {
        // From 0 to 300: direct 300, wrapped 60.
        let mut d = WrapAroundDetector::new(360.0);
        assert_eq!(d.update(300.0), WrapType::ReverseWrap);
    }

    #[test]
    fn half_range_jump_is_not_a_wrap() {
        // Equal distances: wrapped must be strictly shorter.
        let mut d = WrapAroundDetector::new(100.0);
        d.update(25.0);
        assert_eq!(d.update(75.0), WrapType::None);
        assert_eq!(d.update(25.0), WrapType::None);
    }

    #[test]
    fn reset_forgets_previous_value() {
        let mut d = WrapAroundDetector::new(360.0);
        d.update(350.0);
        d.reset();
        assert_eq!(d.last(), WrapType::None);
        assert_eq!(d.update(5.0), WrapType::None);
    }

    #[test]
    fn counter_rollover() {
        let mut d = WrapAroundDetector::new(65536.0);
        let seq = [65000.0, 65500.0, 100.0, 600.0];
        assert_eq!(
            d.classify(&seq),
            vec![
                WrapType::ReverseWrap,
                WrapType::None,
                WrapType::ForwardWrap,
                WrapType::None
            ]
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(WrapType::ForwardWrap.to_string(), "Forward Wrap");
        assert_eq!(WrapType::None.to_string(), "None");
    }

    #[test]
    fn labels_match_serde_names() {
        for wrap in [WrapType::None, WrapType::ForwardWrap, WrapType::ReverseWrap] {
            let json = serde_json::to_string(&wrap).unwrap();
            assert_eq!(json, format!("\"{}\"", wrap.as_str()));
        }
        assert_eq!(WrapType::ReverseWrap.as_str(), "reverse_wrap");
    }
}
