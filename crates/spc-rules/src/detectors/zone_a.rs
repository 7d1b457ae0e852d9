//! Rule 2: two of three points in zone A or beyond

use crate::kernel::WindowScanner;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector};
use crate::violation::Violation;
use spc_core::{ControlLimits, Zones};

/// Points needed past the B/A boundary in one window
const REQUIRED: usize = 2;

/// Flags every 3-point window with at least two points strictly past the
/// B/A boundary
///
/// The two points may lie on opposite sides of the center line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneADetector;

impl ZoneADetector {
    fn flags(window: &[f64], zones: &Zones) -> bool {
        window.iter().filter(|&&v| zones.beyond_zone_b(v)).count() >= REQUIRED
    }
}

impl DetectorProperties for ZoneADetector {
    fn rule(&self) -> Rule {
        Rule::ZoneA
    }
}

impl PatternDetector for ZoneADetector {
    fn detect(&self, sequence: &[f64], limits: &ControlLimits) -> Violation {
        let zones = limits.zones();
        WindowScanner::new(self.rule()).scan(sequence, |window| Self::flags(window, &zones))
    }
}
