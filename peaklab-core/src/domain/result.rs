use super::extremum::{ExtremaType, ExtremumPoint};
use serde::{Deserialize, Serialize};

/// Output of one detection pass.
///
/// Both index lists are ascending by construction of the left-to-right scan
/// and disjoint from each other. Rebuilt from scratch on every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtremaResult {
    maxima: Vec<usize>,
    minima: Vec<usize>,
}

impl ExtremaResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, index: usize, kind: ExtremaType) {
        match kind {
            ExtremaType::Maxima => self.maxima.push(index),
            ExtremaType::Minima => self.minima.push(index),
            ExtremaType::None => {}
        }
    }

    pub fn maxima(&self) -> &[usize] {
        &self.maxima
    }

    pub fn minima(&self) -> &[usize] {
        &self.minima
    }

    /// Combined number of maxima and minima.
    pub fn count(&self) -> usize {
        self.maxima.len() + self.minima.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// All confirmed extrema interleaved in ascending index order.
    pub fn points(&self) -> Vec<ExtremumPoint> {
        let mut points = Vec::with_capacity(self.count());
        let (mut a, mut b) = (0, 0);
        while a < self.maxima.len() || b < self.minima.len() {
            let take_max = match (self.maxima.get(a), self.minima.get(b)) {
                (Some(&hi), Some(&lo)) => hi < lo,
                (Some(_), None) => true,
                _ => false,
            };
            if take_max {
                points.push(ExtremumPoint::new(self.maxima[a], ExtremaType::Maxima));
                a += 1;
            } else {
                points.push(ExtremumPoint::new(self.minima[b], ExtremaType::Minima));
                b += 1;
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result() {
        let r = ExtremaResult::new();
        assert!(r.is_empty());
        assert_eq!(r.count(), 0);
        assert!(r.points().is_empty());
    }

    #[test]
    fn points_are_interleaved_by_index() {
        let mut r = ExtremaResult::new();
        r.push(3, ExtremaType::Maxima);
        r.push(8, ExtremaType::Minima);
        r.push(14, ExtremaType::Maxima);
        r.push(20, ExtremaType::Minima);
        r.push(5, ExtremaType::None);

        assert_eq!(r.count(), 4);
        let kinds: Vec<_> = r.points().iter().map(|p| (p.index, p.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (3, ExtremaType::Maxima),
                (8, ExtremaType::Minima),
                (14, ExtremaType::Maxima),
                (20, ExtremaType::Minima),
            ]
        );
    }

    #[test]
    fn serializes_both_lists() {
        let mut r = ExtremaResult::new();
        r.push(1, ExtremaType::Minima);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"maxima":[],"minima":[1]}"#);
    }
}
