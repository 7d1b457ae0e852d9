//! Control-limit estimation
//!
//! Limits are placed symmetrically around the sample median at a
//! configurable multiple of the sample standard deviation:
//! `median ± sigma_level · stdev`.

use spc_core::{utils, ControlLimits, Error, Result};
use spc_quantile::{DefaultQuantileEstimator, QuantileEstimator};
use tracing::{debug, instrument, warn};

/// Conventional Shewhart multiplier
pub const DEFAULT_SIGMA_LEVEL: f64 = 3.0;

/// Estimates a [`ControlLimits`] pair from a measurement sequence
///
/// `sigma_level` is not required to be positive. With a zero or negative
/// multiplier, or a constant sequence, the returned pair no longer
/// satisfies `lower < upper`.
#[derive(Debug, Clone)]
pub struct ControlLimitEstimator<Q: QuantileEstimator = DefaultQuantileEstimator> {
    estimator: Q,
    sigma_level: f64,
}

impl ControlLimitEstimator<DefaultQuantileEstimator> {
    pub fn new(sigma_level: f64) -> Self {
        Self {
            estimator: DefaultQuantileEstimator::new(),
            sigma_level,
        }
    }
}

impl Default for ControlLimitEstimator<DefaultQuantileEstimator> {
    fn default() -> Self {
        Self::new(DEFAULT_SIGMA_LEVEL)
    }
}

impl<Q: QuantileEstimator> ControlLimitEstimator<Q> {
    /// Use a different estimator for the center line
    pub fn with_estimator<R: QuantileEstimator>(self, estimator: R) -> ControlLimitEstimator<R> {
        ControlLimitEstimator {
            estimator,
            sigma_level: self.sigma_level,
        }
    }

    pub fn sigma_level(&self) -> f64 {
        self.sigma_level
    }

    /// Estimate limits from the sequence
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `sigma_level` is NaN or infinite
    /// - `InsufficientData` for fewer than 2 points (no sample standard deviation)
    /// - `Computation` if the sequence contains NaN or infinite values
    #[instrument(skip(self, sequence), fields(n = sequence.len(), sigma_level = self.sigma_level))]
    pub fn estimate(&self, sequence: &[f64]) -> Result<ControlLimits> {
        if !self.sigma_level.is_finite() {
            return Err(Error::invalid_sigma(self.sigma_level, "finite"));
        }
        if !utils::all_finite(sequence) {
            return Err(Error::non_finite("measurement sequence"));
        }
        let sigma = utils::std_dev(sequence).ok_or(Error::InsufficientData {
            expected: 2,
            actual: sequence.len(),
        })?;
        let median = self.estimator.median(sequence)?;

        let limits = ControlLimits::new(
            median - self.sigma_level * sigma,
            median + self.sigma_level * sigma,
        );
        debug!(median, sigma, lower = limits.lower, upper = limits.upper, "Control limits estimated");
        if limits.is_degenerate() {
            warn!("Control limits collapse to a single value; zone rules fall back to exact comparisons");
        }
        Ok(limits)
    }
}

/// Estimate `median ± sigma_level · stdev` limits with the default median estimator
pub fn suggest_control_limits(sequence: &[f64], sigma_level: f64) -> Result<ControlLimits> {
    ControlLimitEstimator::new(sigma_level).estimate(sequence)
}
