//! Concrete rule detectors
//!
//! One detector per [`Rule`]. Each is independent of the others and can be
//! used on its own, or through [`RuleSet`](crate::RuleSet) to evaluate
//! several rules over the same sequence.

mod beyond_limits;
mod mixture;
mod overcontrol;
mod stratification;
mod trend;
mod zone_a;
mod zone_b;
mod zone_c;

pub use beyond_limits::BeyondLimitsDetector;
pub use mixture::MixtureDetector;
pub use overcontrol::OvercontrolDetector;
pub use stratification::StratificationDetector;
pub use trend::TrendDetector;
pub use zone_a::ZoneADetector;
pub use zone_b::ZoneBDetector;
pub use zone_c::ZoneCDetector;

use crate::config::AlternationReference;
use crate::rule::Rule;
use crate::traits::{PatternDetector, SimpleDetector};
use crate::violation::Violation;
use spc_core::ControlLimits;

/// Build the detector for a rule
pub fn detector_for(rule: Rule, reference: AlternationReference) -> Box<dyn PatternDetector> {
    match rule {
        Rule::BeyondLimits => Box::new(BeyondLimitsDetector),
        Rule::ZoneA => Box::new(ZoneADetector),
        Rule::ZoneB => Box::new(ZoneBDetector),
        Rule::ZoneC => Box::new(ZoneCDetector),
        Rule::Trend => Box::new(TrendDetector),
        Rule::Mixture => Box::new(MixtureDetector),
        Rule::Stratification => Box::new(StratificationDetector),
        Rule::Overcontrol => Box::new(OvercontrolDetector::new(reference)),
    }
}

/// Points strictly outside the control limits
pub fn beyond_limits(sequence: &[f64], limits: &ControlLimits) -> Violation {
    BeyondLimitsDetector.detect(sequence, limits)
}

/// 2 of 3 points in zone A or beyond
pub fn zone_a(sequence: &[f64], limits: &ControlLimits) -> Violation {
    ZoneADetector.detect(sequence, limits)
}

/// 4 of 5 points in zone B or beyond
pub fn zone_b(sequence: &[f64], limits: &ControlLimits) -> Violation {
    ZoneBDetector.detect(sequence, limits)
}

/// 7 consecutive points on one side of the center line
pub fn zone_c(sequence: &[f64], limits: &ControlLimits) -> Violation {
    ZoneCDetector.detect(sequence, limits)
}

/// 7 points steadily increasing or decreasing
pub fn trend(sequence: &[f64]) -> Violation {
    TrendDetector.detect_simple(sequence)
}

/// 8 consecutive points outside zone C
pub fn mixture(sequence: &[f64], limits: &ControlLimits) -> Violation {
    MixtureDetector.detect(sequence, limits)
}

/// 15 consecutive points inside zone C
pub fn stratification(sequence: &[f64], limits: &ControlLimits) -> Violation {
    StratificationDetector.detect(sequence, limits)
}

/// 14 points alternating about the center line, oriented by the center line
pub fn overcontrol(sequence: &[f64], limits: &ControlLimits) -> Violation {
    OvercontrolDetector::default().detect(sequence, limits)
}
