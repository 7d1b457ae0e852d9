//! Process capability analysis
//!
//! Computes percentile-based performance indices that compare the natural
//! spread of a process with its specification limits.
//!
//! # Indices
//!
//! - **Pp**: overall potential capability (spread vs tolerance)
//! - **Ppu**, **Ppl**: one-sided capability against each limit
//! - **Ppk**: the binding one-sided value, `min(Ppl, Ppu)`
//!
//! Values above 1.0 mean the estimated spread fits inside the tolerance;
//! 1.33 is a common acceptance threshold.
//!
//! # Example
//!
//! ```rust
//! use spc_capability::capability;
//!
//! let data: Vec<f64> = (0..200).map(|i| ((i * 37) % 200) as f64 / 100.0 - 1.0).collect();
//! let indices = capability(&data, -2.0, 2.0).unwrap();
//!
//! assert!(indices.pp > 1.0);
//! assert_eq!(indices.ppk, indices.ppl.min(indices.ppu));
//! ```
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.
//! - ISO 22514-2, process performance indices for non-normal data
//!   (percentile method).

pub mod coverage;
pub mod indices;

pub use coverage::TailCoverage;
pub use indices::{capability, CapabilityIndices, ProcessCapability};
