//! Rule 5: seven points steadily increasing or decreasing

use crate::kernel::WindowScanner;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector, SimpleDetector};
use crate::violation::Violation;
use spc_core::ControlLimits;

/// Flags every 7-point window whose six successive differences all go the
/// same way
///
/// Equal neighbours count toward neither direction, so a single tie inside
/// the window prevents a flag. Control limits play no part in this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendDetector;

impl TrendDetector {
    fn flags(window: &[f64]) -> bool {
        let required = window.len() - 1;
        let (mut up, mut down) = (0usize, 0usize);
        for pair in window.windows(2) {
            if pair[1] > pair[0] {
                up += 1;
            } else if pair[1] < pair[0] {
                down += 1;
            }
        }
        up >= required || down >= required
    }
}

impl DetectorProperties for TrendDetector {
    fn rule(&self) -> Rule {
        Rule::Trend
    }
}

impl SimpleDetector for TrendDetector {
    fn detect_simple(&self, sequence: &[f64]) -> Violation {
        WindowScanner::new(self.rule()).scan(sequence, Self::flags)
    }
}

impl PatternDetector for TrendDetector {
    fn detect(&self, sequence: &[f64], _limits: &ControlLimits) -> Violation {
        self.detect_simple(sequence)
    }
}
