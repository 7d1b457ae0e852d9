//! Error type shared by the spc-stats crates
//!
//! Only operations that cannot produce a meaningful number fail. Rule
//! detectors never do: a sequence too short for a rule simply yields no
//! violation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A configuration value or argument is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The measurement data or limits are unusable as given
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Too few measurements for the statistic
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The calculation met values it cannot work with
    #[error("Computation error: {0}")]
    Computation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// No measurements at all
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// A sigma multiplier that is NaN, infinite or otherwise unusable
    pub fn invalid_sigma(sigma_level: f64, requirement: &str) -> Self {
        Self::InvalidParameter(format!("sigma level must be {requirement}, got {sigma_level}"))
    }

    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}
