//! Rule 3: four of five points in zone B or beyond

use crate::kernel::WindowScanner;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector};
use crate::violation::Violation;
use spc_core::{ControlLimits, Zones};

const REQUIRED: usize = 4;

/// Flags every 5-point window with at least four points strictly past the
/// C/B boundary, on either side
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneBDetector;

impl ZoneBDetector {
    fn flags(window: &[f64], zones: &Zones) -> bool {
        window.iter().filter(|&&v| zones.beyond_zone_c(v)).count() >= REQUIRED
    }
}

impl DetectorProperties for ZoneBDetector {
    fn rule(&self) -> Rule {
        Rule::ZoneB
    }
}

impl PatternDetector for ZoneBDetector {
    fn detect(&self, sequence: &[f64], limits: &ControlLimits) -> Violation {
        let zones = limits.zones();
        WindowScanner::new(self.rule()).scan(sequence, |window| Self::flags(window, &zones))
    }
}
