//! Linear-interpolation quantile estimator
//!
//! The sample quantile at probability `p` sits at fractional rank
//! `h = (n - 1) p` in the sorted sample and is interpolated linearly between
//! the two closest order statistics. This is Hyndman & Fan definition 7,
//! the default of most numerical environments.

use crate::{Error, QuantileEstimator, Result};

/// Hyndman & Fan type 7 quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

/// Create a linear-interpolation estimator
pub fn linear_interpolation() -> LinearInterpolation {
    LinearInterpolation
}

impl LinearInterpolation {
    pub fn new() -> Self {
        Self
    }
}

impl QuantileEstimator for LinearInterpolation {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Error::check_non_empty(sorted_data)?;

        let n = sorted_data.len();
        let h = (n - 1) as f64 * p;
        let lo = (h.floor() as usize).min(n - 1);
        let hi = (lo + 1).min(n - 1);
        let frac = h - lo as f64;

        let a = sorted_data[lo];
        let b = sorted_data[hi];
        if frac == 0.0 || a == b {
            return Ok(a);
        }
        Ok(a + frac * (b - a))
    }
}
