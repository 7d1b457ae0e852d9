//! Statistical process control toolkit
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`spc_core`]: errors, control and specification limits, zone geometry
//! - [`spc_quantile`]: percentile and median estimation
//! - [`spc_capability`]: Pp, Ppu, Ppl and Ppk from sample percentiles
//! - [`spc_rules`]: control-limit estimation and the eight Western Electric /
//!   Nelson run rules
//!
//! # Example
//!
//! ```rust
//! use spc_stats::prelude::*;
//!
//! let data: Vec<f64> = (0..100).map(|i| ((i * 13) % 17) as f64 / 4.0).collect();
//!
//! let indices = capability(&data, -2.0, 6.0).unwrap();
//! assert_eq!(indices.ppk, indices.ppl.min(indices.ppu));
//!
//! let limits = suggest_control_limits(&data, 3.0).unwrap();
//! let report = RuleSet::default().evaluate_with_limits(&data, limits);
//! assert!(report.violations_for(Rule::BeyondLimits).unwrap().is_empty());
//! ```

pub use spc_capability;
pub use spc_core;
pub use spc_quantile;
pub use spc_rules;

pub use spc_core::{ControlLimits, Error, Result, SpecLimits, Zone, Zones};

/// Prelude for convenient imports
pub mod prelude {
    pub use spc_capability::{capability, CapabilityIndices, ProcessCapability, TailCoverage};
    pub use spc_core::{ControlLimits, Error, Result, SpecLimits, Zone, Zones};
    pub use spc_quantile::{LinearInterpolation, QuantileEstimator};
    pub use spc_rules::{
        detectors, suggest_control_limits, AlternationReference, ControlLimitEstimator,
        DetectorProperties, PatternDetector, Rule, RuleReport, RuleSet, RuleSetConfig,
        SimpleDetector, Violation,
    };
}
