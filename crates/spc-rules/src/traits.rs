//! Core traits for pattern detection
//!
//! Every detector is a pure function of the measurement sequence (and, for
//! most rules, a control-limit pair). Detectors hold only their own
//! configuration, so one instance can be shared across threads and reused
//! for any number of sequences.

use crate::{rule::Rule, violation::Violation};
use spc_core::ControlLimits;

/// Properties of a detector that don't depend on the data
pub trait DetectorProperties {
    /// The rule this detector evaluates
    fn rule(&self) -> Rule;

    /// Number of consecutive points in one evaluation window
    fn window_size(&self) -> usize {
        self.rule().window_size()
    }
}

/// Detector evaluated against a control-limit pair
pub trait PatternDetector: DetectorProperties + Send + Sync {
    /// Scan the whole sequence and return the deduplicated violation set
    ///
    /// Sequences shorter than [`DetectorProperties::window_size`] yield an
    /// empty violation.
    fn detect(&self, sequence: &[f64], limits: &ControlLimits) -> Violation;
}

/// Detector that needs nothing but the sequence itself
pub trait SimpleDetector: DetectorProperties {
    fn detect_simple(&self, sequence: &[f64]) -> Violation;
}
