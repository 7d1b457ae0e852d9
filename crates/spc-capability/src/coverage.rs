//! Tail coverage of the percentile spread estimator
//!
//! Under a normal model the interval `mean ± 3σ` leaves 0.135% of the
//! distribution in each tail. Taking the 0.135th and 99.865th sample
//! percentiles therefore estimates the "6σ" spread without assuming
//! normality of the data itself.

use serde::{Deserialize, Serialize};
use spc_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Pair of tail probabilities bracketing the natural process spread
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailCoverage {
    /// Probability of the lower percentile (`Lp`)
    pub lower: f64,
    /// Probability of the upper percentile (`Up`)
    pub upper: f64,
}

impl TailCoverage {
    /// The conventional ±3σ-equivalent percentiles, 0.135% and 99.865%
    pub const THREE_SIGMA: TailCoverage = TailCoverage {
        lower: 0.00135,
        upper: 0.99865,
    };

    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&lower) {
            return Err(Error::invalid_quantile(lower));
        }
        if !(0.0..=1.0).contains(&upper) {
            return Err(Error::invalid_quantile(upper));
        }
        if lower >= upper {
            return Err(Error::InvalidParameter(format!(
                "lower tail probability {lower} must be below upper tail probability {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Symmetric tail probabilities equivalent to `±sigma` under a normal model
    pub fn from_sigma(sigma: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "sigma coverage must be finite and positive, got {sigma}"
            )));
        }
        let normal =
            Normal::new(0.0, 1.0).map_err(|e| Error::Computation(format!("Normal: {e}")))?;
        let lower = normal.cdf(-sigma);
        Self::new(lower, 1.0 - lower)
    }
}

impl Default for TailCoverage {
    fn default() -> Self {
        Self::THREE_SIGMA
    }
}
