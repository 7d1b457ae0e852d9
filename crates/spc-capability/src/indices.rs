//! Percentile-based process performance indices (Pp, Ppu, Ppl, Ppk)
//!
//! The spread of the process is estimated from the sample itself, without a
//! normality assumption:
//!
//! - `Up`: upper tail percentile (99.865th by default)
//! - `Lp`: lower tail percentile (0.135th by default)
//! - `M`: median
//!
//! | Index | Formula |
//! |-------|---------|
//! | Pp    | `(USL - LSL) / (Up - Lp)` |
//! | Ppu   | `(USL - M) / (Up - M)` |
//! | Ppl   | `(M - LSL) / (M - Lp)` |
//! | Ppk   | `min(Ppl, Ppu)` |
//!
//! # Degenerate spread
//!
//! A zero denominator is not an error. Division follows IEEE-754: a positive
//! numerator gives `+inf`, a negative one `-inf`, and `0 / 0` gives `NaN`.
//! `Ppk` is taken with [`f64::min`], which ignores a `NaN` operand when the
//! other one is a number. The result is symmetric: a `NaN` on either side
//! yields the other side's value, whichever of `Ppl` and `Ppu` it is.

use crate::coverage::TailCoverage;
use serde::{Deserialize, Serialize};
use spc_core::{utils, Error, Result, SpecLimits};
use spc_quantile::{DefaultQuantileEstimator, QuantileEstimator};
use std::fmt;
use tracing::{debug, instrument};

/// Capability indices of one measurement sequence against one pair of
/// specification limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapabilityIndices {
    /// Overall potential capability, independent of centering
    pub pp: f64,
    /// Capability against the upper specification limit
    pub ppu: f64,
    /// Capability against the lower specification limit
    pub ppl: f64,
    /// Worst one-sided capability, `min(ppl, ppu)`
    pub ppk: f64,
    /// Estimated upper tail percentile `Up`
    pub upper_percentile: f64,
    /// Estimated lower tail percentile `Lp`
    pub lower_percentile: f64,
    /// Sample median `M`
    pub median: f64,
}

impl CapabilityIndices {
    /// Whether any index is infinite or NaN
    pub fn is_degenerate(&self) -> bool {
        ![self.pp, self.ppu, self.ppl, self.ppk]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Whether `ppk` reaches the given threshold (1.33 is a common target)
    pub fn is_capable(&self, threshold: f64) -> bool {
        self.ppk >= threshold
    }
}

impl fmt::Display for CapabilityIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Process Capability:")?;
        writeln!(
            f,
            "  Lp: {:.4}  M: {:.4}  Up: {:.4}",
            self.lower_percentile, self.median, self.upper_percentile
        )?;
        writeln!(f, "  Pp:  {:.4}", self.pp)?;
        writeln!(f, "  Ppu: {:.4}", self.ppu)?;
        writeln!(f, "  Ppl: {:.4}", self.ppl)?;
        write!(f, "  Ppk: {:.4}", self.ppk)
    }
}

/// Capability calculator
///
/// Parameterized by the quantile estimator and by the tail coverage of the
/// spread estimate. The defaults reproduce the conventional definition.
///
/// # Examples
///
/// ```
/// use spc_capability::ProcessCapability;
/// use spc_core::SpecLimits;
///
/// let data: Vec<f64> = (0..=100).map(|i| i as f64 / 10.0 - 5.0).collect();
/// let indices = ProcessCapability::new()
///     .compute(&data, &SpecLimits::new(-10.0, 10.0))
///     .unwrap();
///
/// assert_eq!(indices.ppk, indices.ppl.min(indices.ppu));
/// assert!(indices.pp > 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessCapability<Q: QuantileEstimator = DefaultQuantileEstimator> {
    estimator: Q,
    coverage: TailCoverage,
}

impl ProcessCapability<DefaultQuantileEstimator> {
    pub fn new() -> Self {
        Self {
            estimator: DefaultQuantileEstimator::new(),
            coverage: TailCoverage::THREE_SIGMA,
        }
    }
}

impl Default for ProcessCapability<DefaultQuantileEstimator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: QuantileEstimator> ProcessCapability<Q> {
    /// Use a different quantile estimator
    pub fn with_estimator<R: QuantileEstimator>(self, estimator: R) -> ProcessCapability<R> {
        ProcessCapability {
            estimator,
            coverage: self.coverage,
        }
    }

    /// Use different tail percentiles for `Lp` and `Up`
    pub fn with_coverage(mut self, coverage: TailCoverage) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn coverage(&self) -> TailCoverage {
        self.coverage
    }

    /// Compute all four indices
    ///
    /// # Errors
    ///
    /// - `InsufficientData` for an empty sequence
    /// - `Computation` if the sequence contains NaN or infinite values
    #[instrument(skip(self, data), fields(n = data.len(), estimator = self.estimator.name()))]
    pub fn compute(&self, data: &[f64], spec: &SpecLimits) -> Result<CapabilityIndices> {
        if data.is_empty() {
            return Err(Error::empty_input());
        }
        if !utils::all_finite(data) {
            return Err(Error::non_finite("measurement sequence"));
        }

        let sorted = utils::sorted(data);
        let estimates = self.estimator.quantiles_sorted(
            &sorted,
            &[self.coverage.lower, 0.5, self.coverage.upper],
        )?;
        let (lp, m, up) = (estimates[0], estimates[1], estimates[2]);
        debug!(lp, m, up, "Percentile spread estimated");

        let pp = spec.width() / (up - lp);
        let ppu = (spec.upper - m) / (up - m);
        let ppl = (m - spec.lower) / (m - lp);
        let ppk = ppl.min(ppu);

        let indices = CapabilityIndices {
            pp,
            ppu,
            ppl,
            ppk,
            upper_percentile: up,
            lower_percentile: lp,
            median: m,
        };
        if indices.is_degenerate() {
            debug!(?indices, "Zero spread on at least one side");
        }
        Ok(indices)
    }
}

/// Compute capability indices with the default estimator and coverage
pub fn capability(data: &[f64], lower_spec: f64, upper_spec: f64) -> Result<CapabilityIndices> {
    ProcessCapability::new().compute(data, &SpecLimits::new(lower_spec, upper_spec))
}
