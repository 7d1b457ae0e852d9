//! Percentile and median estimation
//!
//! Capability indices and control limits are built on order statistics of
//! the measurement sequence. This crate supplies them through the
//! [`QuantileEstimator`] trait so that the estimation method is a parameter
//! of the calculations rather than baked into them.
//!
//! # Example
//!
//! ```rust
//! use spc_quantile::{linear_interpolation, QuantileEstimator};
//!
//! let est = linear_interpolation();
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let median = est.median(&data).unwrap();
//! let p90 = est.quantile(&data, 0.9).unwrap();
//! assert_eq!(median, 3.0);
//! assert!((p90 - 4.6).abs() < 1e-12);
//! ```

pub mod error;
pub mod estimators;
pub mod traits;

// Re-export main types
pub use error::{Error, Result};
pub use estimators::{linear_interpolation, LinearInterpolation};
pub use traits::QuantileEstimator;

/// Default estimator used across the workspace
pub type DefaultQuantileEstimator = LinearInterpolation;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, LinearInterpolation, QuantileEstimator, Result};
}
