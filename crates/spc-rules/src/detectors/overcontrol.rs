//! Rule 8: fourteen points alternating about the center line

use crate::config::AlternationReference;
use crate::kernel::WindowScanner;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector};
use crate::violation::Violation;
use spc_core::{ControlLimits, Zones};

/// Flags every 14-point window that alternates strictly about the center line
///
/// The window is split into its 1st, 3rd, 5th… points and its 2nd, 4th,
/// 6th… points (seven each). If the first point is above the reference,
/// all of the first group must be strictly above the center line and all
/// of the second strictly below; otherwise the other way round.
#[derive(Debug, Clone, Copy, Default)]
pub struct OvercontrolDetector {
    reference: AlternationReference,
}

impl OvercontrolDetector {
    pub fn new(reference: AlternationReference) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> AlternationReference {
        self.reference
    }

    fn flags(&self, window: &[f64], zones: &Zones) -> bool {
        let center = zones.center;
        let pivot = match self.reference {
            AlternationReference::Center => center,
            AlternationReference::Zero => 0.0,
        };
        let first_group_above = window[0] > pivot;

        window.iter().enumerate().all(|(position, &v)| {
            let in_first_group = position % 2 == 0;
            if in_first_group == first_group_above {
                v > center
            } else {
                v < center
            }
        })
    }
}

impl DetectorProperties for OvercontrolDetector {
    fn rule(&self) -> Rule {
        Rule::Overcontrol
    }
}

impl PatternDetector for OvercontrolDetector {
    fn detect(&self, sequence: &[f64], limits: &ControlLimits) -> Violation {
        let zones = limits.zones();
        WindowScanner::new(self.rule()).scan(sequence, |window| self.flags(window, &zones))
    }
}
