//! Control limits and specification limits
//!
//! The two pairs look alike but come from different places: control limits
//! are estimated from the process data, specification limits are tolerance
//! bounds imposed from outside.

use crate::{zones::Zones, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A `(lower, upper)` control-limit pair
///
/// The pair is expected to satisfy `lower <= upper`. [`ControlLimits::new`]
/// does not enforce it; use [`ControlLimits::checked`] when the values come
/// from an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    pub lower: f64,
    pub upper: f64,
}

impl ControlLimits {
    /// Create a limit pair without validation
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Create a limit pair, rejecting non-finite or inverted bounds
    pub fn checked(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::non_finite("control limits"));
        }
        if lower > upper {
            return Err(Error::InvalidInput(format!(
                "lower control limit {lower} exceeds upper control limit {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Center line, `lower + (upper - lower) / 2`
    pub fn center(&self) -> f64 {
        self.lower + self.half_range()
    }

    /// Half the distance between the limits
    pub fn half_range(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }

    /// Full distance between the limits
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether both limits collapse onto a single value
    pub fn is_degenerate(&self) -> bool {
        self.upper == self.lower
    }

    /// Whether a value lies strictly outside the limits
    pub fn is_beyond(&self, value: f64) -> bool {
        value > self.upper || value < self.lower
    }

    /// Zone geometry derived from these limits
    pub fn zones(&self) -> Zones {
        Zones::from_limits(self)
    }
}

impl fmt::Display for ControlLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[LCL {:.4}, CL {:.4}, UCL {:.4}]",
            self.lower,
            self.center(),
            self.upper
        )
    }
}

/// A `(lower, upper)` specification-limit pair
///
/// Inverted limits are accepted by [`SpecLimits::new`] so that capability
/// indices still evaluate (and come out negative); a warning is logged.
/// [`SpecLimits::validated`] rejects them instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecLimits {
    pub lower: f64,
    pub upper: f64,
}

impl SpecLimits {
    pub fn new(lower: f64, upper: f64) -> Self {
        if lower > upper {
            warn!(lower, upper, "specification limits are inverted");
        }
        Self { lower, upper }
    }

    /// Create specification limits, rejecting non-finite or inverted bounds
    pub fn validated(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::non_finite("specification limits"));
        }
        if lower > upper {
            return Err(Error::InvalidParameter(format!(
                "lower specification limit {lower} exceeds upper specification limit {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Tolerance width, `upper - lower`
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }
}

impl fmt::Display for SpecLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[LSL {:.4}, USL {:.4}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_and_half_range() {
        let limits = ControlLimits::new(-3.0, 3.0);
        assert_eq!(limits.center(), 0.0);
        assert_eq!(limits.half_range(), 3.0);
        assert_eq!(limits.width(), 6.0);

        let limits = ControlLimits::new(10.0, 16.0);
        assert_relative_eq!(limits.center(), 13.0);
        assert_relative_eq!(limits.half_range(), 3.0);
    }

    #[test]
    fn test_beyond_is_strict() {
        let limits = ControlLimits::new(-3.0, 3.0);
        assert!(!limits.is_beyond(3.0));
        assert!(!limits.is_beyond(-3.0));
        assert!(limits.is_beyond(4.0));
        assert!(limits.is_beyond(-4.0));
    }

    #[test]
    fn test_checked_rejects_bad_limits() {
        assert!(ControlLimits::checked(1.0, 0.0).is_err());
        assert!(ControlLimits::checked(f64::NAN, 0.0).is_err());
        assert!(ControlLimits::checked(0.0, f64::INFINITY).is_err());
        assert!(ControlLimits::checked(2.0, 2.0).unwrap().is_degenerate());
    }

    #[test]
    fn test_spec_limits() {
        let spec = SpecLimits::new(-6.0, 6.0);
        assert_eq!(spec.width(), 12.0);
        assert!(!spec.is_inverted());

        let inverted = SpecLimits::new(6.0, -6.0);
        assert!(inverted.is_inverted());
        assert_eq!(inverted.width(), -12.0);

        assert!(SpecLimits::validated(6.0, -6.0).is_err());
        assert!(SpecLimits::validated(f64::NAN, 1.0).is_err());
        assert!(SpecLimits::validated(-1.0, 1.0).is_ok());
    }

    #[test]
    fn test_display() {
        let limits = ControlLimits::new(-3.0, 3.0);
        assert_eq!(limits.to_string(), "[LCL -3.0000, CL 0.0000, UCL 3.0000]");
        let spec = SpecLimits::new(-6.0, 6.0);
        assert_eq!(spec.to_string(), "[LSL -6.0000, USL 6.0000]");
    }
}
