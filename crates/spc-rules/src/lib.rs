//! Control-limit estimation and run-rule pattern detection
//!
//! This crate implements the Western Electric / Nelson rules for detecting
//! non-random patterns in a measurement sequence, plus the estimation of the
//! control limits those rules are judged against.
//!
//! # Rules
//!
//! | Rule | Window | Flags the window when |
//! |------|--------|-----------------------|
//! | [`Rule::BeyondLimits`] | 1 | the point is strictly outside the control limits |
//! | [`Rule::ZoneA`] | 3 | at least 2 points are beyond zone B |
//! | [`Rule::ZoneB`] | 5 | at least 4 points are beyond zone C |
//! | [`Rule::ZoneC`] | 7 | all points are strictly on one side of the center line |
//! | [`Rule::Trend`] | 7 | the points are strictly increasing or strictly decreasing |
//! | [`Rule::Mixture`] | 8 | no point is strictly inside zone C |
//! | [`Rule::Stratification`] | 15 | every point is strictly inside zone C |
//! | [`Rule::Overcontrol`] | 14 | the points alternate strictly about the center line |
//!
//! Every offset of the sequence is evaluated. When a window is flagged, all
//! of its points are reported, and each rule returns its points once,
//! ascending by index.
//!
//! ## Usage
//!
//! ```rust
//! use spc_rules::{suggest_control_limits, Rule, RuleSet};
//!
//! let mut data: Vec<f64> = (0..30).map(|i| ((i * 7) % 5) as f64 - 2.0).collect();
//! data[12] = 40.0;
//!
//! let limits = suggest_control_limits(&data, 3.0).unwrap();
//! let report = RuleSet::default().evaluate_with_limits(&data, limits);
//!
//! assert!(report.violations_for(Rule::BeyondLimits).unwrap().contains(12));
//! println!("{report}");
//! ```
//!
//! Individual detectors can be used on their own:
//!
//! ```rust
//! use spc_core::ControlLimits;
//! use spc_rules::detectors;
//!
//! let limits = ControlLimits::new(-3.0, 3.0);
//! let data = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1];
//!
//! assert_eq!(detectors::zone_c(&data, &limits).len(), 7);
//! assert_eq!(detectors::trend(&data).len(), 7);
//! assert!(detectors::beyond_limits(&data, &limits).is_empty());
//! ```

pub mod config;
pub mod control_limits;
pub mod detectors;
pub mod kernel;
pub mod rule;
pub mod ruleset;
pub mod traits;
pub mod violation;

pub use config::{AlternationReference, RuleSetConfig};
pub use control_limits::{suggest_control_limits, ControlLimitEstimator, DEFAULT_SIGMA_LEVEL};
pub use detectors::{
    detector_for, BeyondLimitsDetector, MixtureDetector, OvercontrolDetector,
    StratificationDetector, TrendDetector, ZoneADetector, ZoneBDetector, ZoneCDetector,
};
pub use kernel::WindowScanner;
pub use rule::Rule;
pub use ruleset::{RuleReport, RuleSet};
pub use traits::{DetectorProperties, PatternDetector, SimpleDetector};
pub use violation::{Violation, ViolationCollector, ViolationPoint};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        suggest_control_limits, DetectorProperties, PatternDetector, Rule, RuleReport, RuleSet,
        RuleSetConfig, SimpleDetector, Violation,
    };
    pub use spc_core::{ControlLimits, Zones};
}
