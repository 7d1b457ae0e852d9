//! Rule 1: points beyond the control limits

use crate::kernel::WindowScanner;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector};
use crate::violation::Violation;
use spc_core::ControlLimits;

/// Flags every point strictly above the upper or strictly below the lower
/// control limit
///
/// A point exactly on a limit is in control. With collapsed limits every
/// point that differs from the single limit value is flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeyondLimitsDetector;

impl DetectorProperties for BeyondLimitsDetector {
    fn rule(&self) -> Rule {
        Rule::BeyondLimits
    }
}

impl PatternDetector for BeyondLimitsDetector {
    fn detect(&self, sequence: &[f64], limits: &ControlLimits) -> Violation {
        WindowScanner::new(self.rule()).scan(sequence, |window| limits.is_beyond(window[0]))
    }
}
