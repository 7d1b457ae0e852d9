//! Rule 6: eight consecutive points with none inside zone C

use crate::kernel::WindowScanner;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector};
use crate::violation::Violation;
use spc_core::{ControlLimits, Zones};

/// Flags every 8-point window in which no point is strictly inside zone C
///
/// The window is walked from its first point and rejected at the first
/// point found inside the C band. Points exactly on a C boundary are not
/// inside the band. Sides may mix freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixtureDetector;

impl MixtureDetector {
    fn flags(window: &[f64], zones: &Zones) -> bool {
        let run = window
            .iter()
            .take_while(|&&v| zones.outside_zone_c(v))
            .count();
        run == window.len()
    }
}

impl DetectorProperties for MixtureDetector {
    fn rule(&self) -> Rule {
        Rule::Mixture
    }
}

impl PatternDetector for MixtureDetector {
    fn detect(&self, sequence: &[f64], limits: &ControlLimits) -> Violation {
        let zones = limits.zones();
        WindowScanner::new(self.rule()).scan(sequence, |window| Self::flags(window, &zones))
    }
}
