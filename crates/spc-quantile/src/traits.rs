//! Core trait for quantile estimation

use crate::{Error, Result};
use spc_core::utils::sorted;

/// Main trait for quantile estimation
///
/// Measurement sequences are never reordered: the unsorted entry points
/// sort a private copy. Callers that need several quantiles of the same
/// data should sort once and use the `_sorted` variants.
pub trait QuantileEstimator {
    /// Short name of the estimation method
    fn name(&self) -> &'static str;

    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate a single quantile
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Error::check_non_empty(data)?;
        self.quantile_sorted(&sorted(data), p)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Estimate multiple quantiles, sorting the data once
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        Error::check_non_empty(data)?;
        self.quantiles_sorted(&sorted(data), ps)
    }

    /// The 0.5 quantile
    fn median(&self, data: &[f64]) -> Result<f64> {
        self.quantile(data, 0.5)
    }
}
