//! Types describing rule violations

use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One flagged point of the measurement sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViolationPoint {
    /// Position in the original sequence
    pub index: usize,
    /// Measurement at that position
    pub value: f64,
}

impl fmt::Display for ViolationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:.4}", self.index, self.value)
    }
}

/// All points flagged by one rule
///
/// Points are strictly ascending by index with no duplicates. A rule that
/// matched nothing yields an empty violation, never an error. Only a
/// [`ViolationCollector`] builds one, so the type serializes but does not
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    rule: Rule,
    points: Vec<ViolationPoint>,
}

impl Violation {
    /// A violation with no flagged points
    pub fn empty(rule: Rule) -> Self {
        Self {
            rule,
            points: Vec::new(),
        }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Flagged points, ascending by index
    pub fn points(&self) -> &[ViolationPoint] {
        &self.points
    }

    /// Flagged indices, ascending
    pub fn indices(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.index).collect()
    }

    /// Flagged values, in index order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.points
            .binary_search_by_key(&index, |p| p.index)
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {} point(s)", self.rule, self.rule.description(), self.len())?;
        if !self.points.is_empty() {
            let indices: Vec<String> = self.points.iter().map(|p| p.index.to_string()).collect();
            write!(f, " at [{}]", indices.join(", "))?;
        }
        Ok(())
    }
}

/// Accumulates flagged windows into a [`Violation`]
///
/// Overlapping windows flag the same index more than once; the first value
/// recorded for an index is kept and later ones are ignored.
#[derive(Debug, Clone)]
pub struct ViolationCollector {
    rule: Rule,
    hits: BTreeMap<usize, f64>,
}

impl ViolationCollector {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            hits: BTreeMap::new(),
        }
    }

    /// Record a single point
    pub fn add_point(&mut self, index: usize, value: f64) {
        self.hits.entry(index).or_insert(value);
    }

    /// Record every point of a window starting at `offset`
    pub fn add_window(&mut self, offset: usize, window: &[f64]) {
        for (i, &value) in window.iter().enumerate() {
            self.add_point(offset + i, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn finish(self) -> Violation {
        Violation {
            rule: self.rule,
            points: self
                .hits
                .into_iter()
                .map(|(index, value)| ViolationPoint { index, value })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_windows_are_merged() {
        let mut collector = ViolationCollector::new(Rule::ZoneA);
        collector.add_window(2, &[1.0, 2.0, 3.0]);
        collector.add_window(0, &[9.0, 9.0, 9.0]);
        collector.add_window(3, &[9.0, 9.0, 4.0]);
        let violation = collector.finish();

        assert_eq!(violation.indices(), vec![0, 1, 2, 3, 4, 5]);
        // Index 2 keeps the value from the first window that flagged it
        assert_eq!(violation.values(), vec![9.0, 9.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_empty_violation() {
        let violation = ViolationCollector::new(Rule::Trend).finish();
        assert!(violation.is_empty());
        assert_eq!(violation, Violation::empty(Rule::Trend));
        assert_eq!(violation.to_string(), "trend (7 points trending up or down): 0 point(s)");
    }

    #[test]
    fn test_contains() {
        let mut collector = ViolationCollector::new(Rule::BeyondLimits);
        collector.add_point(7, 4.0);
        collector.add_point(2, -5.0);
        let violation = collector.finish();
        assert!(violation.contains(2));
        assert!(violation.contains(7));
        assert!(!violation.contains(3));
        assert_eq!(
            violation.to_string(),
            "beyond_limits (point beyond the control limits): 2 point(s) at [2, 7]"
        );
    }

    #[test]
    fn test_serialized_points_are_ordered_and_unique() {
        let mut collector = ViolationCollector::new(Rule::Mixture);
        collector.add_point(5, 1.5);
        collector.add_point(2, -1.5);
        collector.add_point(5, 9.0);
        let json = serde_json::to_value(collector.finish()).unwrap();

        assert_eq!(json["rule"], "mixture");
        let points = json["points"].as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0]["index"], 2);
        assert_eq!(points[1]["index"], 5);
        assert_eq!(points[1]["value"], 1.5);
    }
}
