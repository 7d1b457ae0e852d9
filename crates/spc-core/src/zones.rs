//! Zone geometry of a control chart
//!
//! The band between the control limits is split into three equal-width
//! zones on each side of the center line:
//!
//! ```text
//!   UCL ─────────────  upper
//!         zone A
//!       ─────────────  center + 2/3 half_range   (B/A boundary)
//!         zone B
//!       ─────────────  center + 1/3 half_range   (C/B boundary)
//!         zone C
//!   CL  ─────────────  center
//!         zone C
//!       ─────────────  center - 1/3 half_range
//!         zone B
//!       ─────────────  center - 2/3 half_range
//!         zone A
//!   LCL ─────────────  lower
//! ```
//!
//! All membership tests use strict inequalities. When the limits collapse
//! onto one value every band has zero width, so the tests reduce to
//! comparisons against the center itself.

use crate::limits::ControlLimits;
use serde::Serialize;
use std::fmt;

/// Which zone a value falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    C,
    B,
    A,
    /// Strictly outside the control limits
    Beyond,
}

/// Which side of the center line a value lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Above,
    Below,
}

/// Zone boundaries derived from a [`ControlLimits`] pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zones {
    pub center: f64,
    pub half_range: f64,
    pub c_lower: f64,
    pub c_upper: f64,
    pub b_lower: f64,
    pub b_upper: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Zones {
    pub fn from_limits(limits: &ControlLimits) -> Self {
        let half_range = limits.half_range();
        let center = limits.lower + half_range;
        Self {
            center,
            half_range,
            c_lower: center - half_range / 3.0,
            c_upper: center + half_range / 3.0,
            b_lower: center - 2.0 * half_range / 3.0,
            b_upper: center + 2.0 * half_range / 3.0,
            lower: limits.lower,
            upper: limits.upper,
        }
    }

    /// Strictly inside the zone C band
    pub fn in_zone_c(&self, value: f64) -> bool {
        self.c_lower < value && value < self.c_upper
    }

    /// Not strictly inside zone C; a value on a C boundary counts as outside
    ///
    /// With collapsed limits there are no boundaries, only the center, and
    /// a value is outside when it differs from it.
    pub fn outside_zone_c(&self, value: f64) -> bool {
        if self.is_degenerate() {
            value != self.center
        } else {
            !self.in_zone_c(value)
        }
    }

    /// Strictly past a C/B boundary: zone B, A or beyond
    pub fn beyond_zone_c(&self, value: f64) -> bool {
        value < self.c_lower || value > self.c_upper
    }

    /// Strictly past a B/A boundary: zone A or beyond
    pub fn beyond_zone_b(&self, value: f64) -> bool {
        value < self.b_lower || value > self.b_upper
    }

    /// Side of the center line, `None` for a value exactly on it
    pub fn side(&self, value: f64) -> Option<Side> {
        if value > self.center {
            Some(Side::Above)
        } else if value < self.center {
            Some(Side::Below)
        } else {
            None
        }
    }

    pub fn zone_of(&self, value: f64) -> Zone {
        if value > self.upper || value < self.lower {
            Zone::Beyond
        } else if self.beyond_zone_b(value) {
            Zone::A
        } else if self.beyond_zone_c(value) {
            Zone::B
        } else {
            Zone::C
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.half_range == 0.0
    }
}

impl fmt::Display for Zones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A {:.4} | B {:.4} | C {:.4} | CL {:.4} | C {:.4} | B {:.4} | A {:.4}",
            self.lower, self.b_lower, self.c_lower, self.center, self.c_upper, self.b_upper, self.upper
        )
    }
}
