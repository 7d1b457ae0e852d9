//! Core types for statistical process control
//!
//! This crate provides the shared vocabulary of the spc-stats workspace:
//!
//! - [`Error`] and [`Result`], used by every other crate
//! - [`ControlLimits`] and [`SpecLimits`], the two kinds of bounds a
//!   measurement sequence is judged against
//! - [`Zones`], the A/B/C band geometry derived from control limits
//! - [`utils`], slice helpers (sorting, mean, sample standard deviation)
//!
//! A measurement sequence is a plain `&[f64]` in acquisition order. Nothing
//! here owns or mutates it.
//!
//! # Example
//!
//! ```rust
//! use spc_core::{ControlLimits, Zone};
//!
//! let limits = ControlLimits::new(-3.0, 3.0);
//! let zones = limits.zones();
//!
//! assert_eq!(zones.zone_of(0.5), Zone::C);
//! assert_eq!(zones.zone_of(2.5), Zone::A);
//! assert!(limits.is_beyond(3.5));
//! ```

pub mod error;
pub mod limits;
pub mod utils;
pub mod zones;

pub use error::{Error, Result};
pub use limits::{ControlLimits, SpecLimits};
pub use zones::{Side, Zone, Zones};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
