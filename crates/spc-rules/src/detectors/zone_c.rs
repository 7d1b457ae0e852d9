//! Rule 4: seven consecutive points on one side of the center line

use crate::kernel::WindowScanner;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector};
use crate::violation::Violation;
use spc_core::{ControlLimits, Zones};

/// Flags every 7-point window lying strictly on one side of the center line
///
/// The side is fixed by the window's first point; the run is extended from
/// there and stops at the first point that is on the center line or on the
/// other side. A first point exactly on the center line starts no run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneCDetector;

impl ZoneCDetector {
    fn flags(window: &[f64], zones: &Zones) -> bool {
        let Some(side) = zones.side(window[0]) else {
            return false;
        };
        let run = 1 + window[1..]
            .iter()
            .take_while(|&&v| zones.side(v) == Some(side))
            .count();
        run == window.len()
    }
}

impl DetectorProperties for ZoneCDetector {
    fn rule(&self) -> Rule {
        Rule::ZoneC
    }
}

impl PatternDetector for ZoneCDetector {
    fn detect(&self, sequence: &[f64], limits: &ControlLimits) -> Violation {
        let zones = limits.zones();
        WindowScanner::new(self.rule()).scan(sequence, |window| Self::flags(window, &zones))
    }
}
