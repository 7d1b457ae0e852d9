//! Concrete quantile estimator implementations

mod linear;

pub use linear::{linear_interpolation, LinearInterpolation};
