//! Configuration types for rule evaluation

use crate::{control_limits::DEFAULT_SIGMA_LEVEL, rule::Rule};
use serde::{Deserialize, Serialize};
use spc_core::{Error, Result};

/// Reference value that fixes the orientation of an over-control window
///
/// The over-control rule looks at the 1st, 3rd, 5th… points of a window and
/// at the 2nd, 4th, 6th… points, and requires one group entirely above the
/// center line and the other entirely below. Which group is expected above
/// is decided by comparing the first point with this reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternationReference {
    /// Compare the first point with the center line (Nelson rule 4)
    #[default]
    Center,
    /// Compare the first point with zero
    ///
    /// Matches legacy reports produced with a zero-based orientation test.
    /// Only differs from [`AlternationReference::Center`] when the center
    /// line is not at zero.
    Zero,
}

/// Settings for a [`RuleSet`](crate::RuleSet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    /// Multiplier applied to the standard deviation when limits are estimated
    pub sigma_level: f64,
    /// Rules to evaluate, in report order
    pub rules: Vec<Rule>,
    /// Orientation test of the over-control rule
    pub alternation_reference: AlternationReference,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            sigma_level: DEFAULT_SIGMA_LEVEL,
            rules: Rule::ALL.to_vec(),
            alternation_reference: AlternationReference::default(),
        }
    }
}

impl RuleSetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sigma_level(mut self, sigma_level: f64) -> Self {
        self.sigma_level = sigma_level;
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    pub fn with_alternation_reference(mut self, reference: AlternationReference) -> Self {
        self.alternation_reference = reference;
        self
    }

    /// Check the configuration before building detectors from it
    pub fn validate(&self) -> Result<()> {
        if !self.sigma_level.is_finite() || self.sigma_level <= 0.0 {
            return Err(Error::invalid_sigma(self.sigma_level, "finite and positive"));
        }
        if self.rules.is_empty() {
            return Err(Error::InvalidParameter("no rules selected".to_string()));
        }
        Ok(())
    }
}
