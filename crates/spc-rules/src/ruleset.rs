//! Evaluation of several rules over one sequence
//!
//! Detectors never observe each other's results, so a rule set is just a
//! list of detectors applied to the same read-only sequence. With the
//! `parallel` feature the detectors run on the rayon thread pool; the
//! report is identical either way.

use crate::config::RuleSetConfig;
use crate::control_limits::ControlLimitEstimator;
use crate::detectors::detector_for;
use crate::rule::Rule;
use crate::traits::{DetectorProperties, PatternDetector};
use crate::violation::Violation;
use serde::Serialize;
use spc_core::{ControlLimits, Result};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of a rule-set evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleReport {
    limits: ControlLimits,
    sample_size: usize,
    violations: Vec<Violation>,
}

impl RuleReport {
    /// Control limits the rules were evaluated against
    pub fn limits(&self) -> &ControlLimits {
        &self.limits
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// One violation per evaluated rule, in configuration order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn violations_for(&self, rule: Rule) -> Option<&Violation> {
        self.violations.iter().find(|v| v.rule() == rule)
    }

    /// Rules that flagged at least one point
    pub fn triggered_rules(&self) -> Vec<Rule> {
        self.violations
            .iter()
            .filter(|v| !v.is_empty())
            .map(Violation::rule)
            .collect()
    }

    /// Union of all flagged indices, ascending
    pub fn flagged_indices(&self) -> Vec<usize> {
        self.violations
            .iter()
            .flat_map(|v| v.points().iter().map(|p| p.index))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_in_control(&self) -> bool {
        self.violations.iter().all(Violation::is_empty)
    }
}

impl fmt::Display for RuleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rule Evaluation Report:")?;
        writeln!(f, "  Control limits: {}", self.limits)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        if self.is_in_control() {
            return writeln!(f, "  Process in control");
        }
        writeln!(f, "  Violations:")?;
        for violation in self.violations.iter().filter(|v| !v.is_empty()) {
            writeln!(f, "    {violation}")?;
        }
        Ok(())
    }
}

/// A configured set of rule detectors
///
/// # Examples
///
/// ```
/// use spc_rules::{Rule, RuleSet, RuleSetConfig};
/// use spc_core::ControlLimits;
///
/// let rules = RuleSet::new(RuleSetConfig::new().with_rules([Rule::BeyondLimits, Rule::Trend])).unwrap();
/// let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0];
///
/// let report = rules.evaluate_with_limits(&data, ControlLimits::new(-5.0, 5.0));
/// assert_eq!(report.violations_for(Rule::BeyondLimits).unwrap().indices(), vec![6]);
/// assert_eq!(report.violations_for(Rule::Trend).unwrap().len(), 7);
/// assert_eq!(report.flagged_indices(), vec![0, 1, 2, 3, 4, 5, 6]);
/// ```
pub struct RuleSet {
    config: RuleSetConfig,
    detectors: Vec<Box<dyn PatternDetector>>,
}

impl RuleSet {
    /// Build the detectors named by the configuration
    ///
    /// A rule listed more than once is evaluated once, at its first position.
    pub fn new(config: RuleSetConfig) -> Result<Self> {
        config.validate()?;
        let mut seen = BTreeSet::new();
        let detectors = config
            .rules
            .iter()
            .filter(|rule| seen.insert(**rule))
            .map(|&rule| detector_for(rule, config.alternation_reference))
            .collect();
        Ok(Self { config, detectors })
    }

    pub fn config(&self) -> &RuleSetConfig {
        &self.config
    }

    /// Rules evaluated by this set, in report order
    pub fn rules(&self) -> Vec<Rule> {
        self.detectors.iter().map(|d| d.rule()).collect()
    }

    /// Estimate control limits from the sequence, then evaluate every rule
    ///
    /// # Errors
    ///
    /// Fails when limits cannot be estimated (fewer than 2 points or
    /// non-finite values).
    #[instrument(skip(self, sequence), fields(n = sequence.len()))]
    pub fn evaluate(&self, sequence: &[f64]) -> Result<RuleReport> {
        let limits = ControlLimitEstimator::new(self.config.sigma_level).estimate(sequence)?;
        Ok(self.evaluate_with_limits(sequence, limits))
    }

    /// Evaluate every rule against caller-supplied limits
    #[instrument(skip(self, sequence), fields(n = sequence.len(), lower = limits.lower, upper = limits.upper))]
    pub fn evaluate_with_limits(&self, sequence: &[f64], limits: ControlLimits) -> RuleReport {
        let violations = self.run_detectors(sequence, &limits);
        for violation in &violations {
            debug!(rule = %violation.rule(), flagged = violation.len(), "Rule evaluated");
        }
        RuleReport {
            limits,
            sample_size: sequence.len(),
            violations,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run_detectors(&self, sequence: &[f64], limits: &ControlLimits) -> Vec<Violation> {
        self.detectors
            .iter()
            .map(|d| d.detect(sequence, limits))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_detectors(&self, sequence: &[f64], limits: &ControlLimits) -> Vec<Violation> {
        self.detectors
            .par_iter()
            .map(|d| d.detect(sequence, limits))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        let config = RuleSetConfig::default();
        let detectors = config
            .rules
            .iter()
            .map(|&rule| detector_for(rule, config.alternation_reference))
            .collect();
        Self { config, detectors }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("config", &self.config)
            .field("rules", &self.rules())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlternationReference;

    #[test]
    fn test_default_runs_all_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.rules(), Rule::ALL.to_vec());
    }

    #[test]
    fn test_duplicate_rules_evaluated_once() {
        let config = RuleSetConfig::new().with_rules([Rule::Trend, Rule::ZoneA, Rule::Trend]);
        let rules = RuleSet::new(config).unwrap();
        assert_eq!(rules.rules(), vec![Rule::Trend, Rule::ZoneA]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(RuleSet::new(RuleSetConfig::new().with_sigma_level(-1.0)).is_err());
    }

    #[test]
    fn test_in_control_report() {
        let data = [0.0; 10];
        let report = RuleSet::default().evaluate_with_limits(&data, ControlLimits::new(-3.0, 3.0));
        assert_eq!(report.violations().len(), 8);
        // 10 identical points inside zone C: too short for stratification
        assert!(report.is_in_control());
        assert!(report.flagged_indices().is_empty());
        assert!(report.to_string().contains("Process in control"));
    }

    #[test]
    fn test_evaluate_estimates_limits() {
        let mut data: Vec<f64> = (0..40).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();
        data[20] = 25.0;
        let report = RuleSet::default().evaluate(&data).unwrap();
        assert!(report.limits().upper < 25.0);
        assert_eq!(report.violations_for(Rule::BeyondLimits).unwrap().indices(), vec![20]);
        assert!(report.triggered_rules().contains(&Rule::BeyondLimits));
    }

    #[test]
    fn test_evaluate_needs_two_points() {
        assert!(RuleSet::default().evaluate(&[1.0]).is_err());
    }

    #[test]
    fn test_alternation_reference_is_forwarded() {
        let limits = ControlLimits::new(7.0, 13.0);
        let data: Vec<f64> = (0..14).map(|i| if i % 2 == 0 { 9.0 } else { 11.0 }).collect();
        let only_overcontrol = RuleSetConfig::new().with_rules([Rule::Overcontrol]);

        let center = RuleSet::new(only_overcontrol.clone()).unwrap();
        assert_eq!(center.evaluate_with_limits(&data, limits).flagged_indices().len(), 14);

        let zero = RuleSet::new(
            only_overcontrol.with_alternation_reference(AlternationReference::Zero),
        )
        .unwrap();
        assert!(zero.evaluate_with_limits(&data, limits).is_in_control());
    }
}
