//! Errors raised while estimating percentiles
//!
//! Callers in the other crates work with [`spc_core::Error`]; the `From`
//! impl below lets `?` cross the boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Cannot estimate a percentile of an empty sequence")]
    EmptyData,

    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    #[error("Core computation error: {0}")]
    Core(#[from] spc_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for spc_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::EmptyData => spc_core::Error::empty_input(),
            Error::InvalidProbability { p } => spc_core::Error::invalid_quantile(p),
            Error::Core(inner) => inner,
        }
    }
}

impl Error {
    /// `p` must lie in `[0, 1]`; NaN is rejected
    pub fn check_probability(p: f64) -> Result<()> {
        (0.0..=1.0)
            .contains(&p)
            .then_some(())
            .ok_or(Error::InvalidProbability { p })
    }

    pub fn check_non_empty(data: &[f64]) -> Result<()> {
        (!data.is_empty()).then_some(()).ok_or(Error::EmptyData)
    }
}
