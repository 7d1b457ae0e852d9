//! Rule 7: fifteen consecutive points inside zone C

use crate::kernel::WindowScanner;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector};
use crate::violation::Violation;
use spc_core::ControlLimits;

/// Flags every 15-point window lying strictly inside the zone C band
///
/// Unusually small variation usually means the limits were computed from
/// stratified or mixed subgroups. Collapsed limits never flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct StratificationDetector;

impl DetectorProperties for StratificationDetector {
    fn rule(&self) -> Rule {
        Rule::Stratification
    }
}

impl PatternDetector for StratificationDetector {
    fn detect(&self, sequence: &[f64], limits: &ControlLimits) -> Violation {
        let zones = limits.zones();
        WindowScanner::new(self.rule())
            .scan(sequence, |window| window.iter().all(|&v| zones.in_zone_c(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ControlLimits {
        ControlLimits::new(-3.0, 3.0)
    }

    #[test]
    fn test_fifteen_inside_c() {
        let data: Vec<f64> = (0..15).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();
        let violation = StratificationDetector.detect(&data, &limits());
        assert_eq!(violation.indices(), (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_fourteen_is_not_enough() {
        assert!(StratificationDetector.detect(&[0.0; 14], &limits()).is_empty());
    }

    #[test]
    fn test_c_boundary_is_not_inside() {
        let mut data = vec![0.0; 15];
        data[7] = 1.0;
        assert!(StratificationDetector.detect(&data, &limits()).is_empty());
    }

    #[test]
    fn test_sliding_over_longer_run() {
        let mut data = vec![2.5];
        data.extend([0.1; 16]);
        data.push(2.5);
        let violation = StratificationDetector.detect(&data, &limits());
        assert_eq!(violation.indices(), (1..17).collect::<Vec<_>>());
    }

    #[test]
    fn test_collapsed_limits_never_flag() {
        let limits = ControlLimits::new(0.0, 0.0);
        assert!(StratificationDetector.detect(&[0.0; 20], &limits).is_empty());
    }
}
