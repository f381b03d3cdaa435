//! Foundational primitives for covariance-localization fit derivation.
//!
//! ## Normalized Distances
//! All distances are dimensionless, in `[0, 1]`: a physical separation
//! divided by the localization length. The sample axis is uniform, starts
//! at exactly `0.0`, and ends at exactly `1.0`.
//!
//! ## Compact Support
//! Every kernel here is identically zero outside a bounded interval. The
//! tent kernel has half-width `0.5`; the Gaspari-Cohn kernel has support
//! `[0, 1)`.
//!
//! ## Threshold Levels
//! Threshold levels are target correlation values at which effective length
//! scales are extracted from a convolution curve. The level count is derived
//! from the range and step with a small slack term so that binary ranges
//! like `[0.2, 0.9]` at step `0.1` resolve to the expected sample count.

mod axis;
mod error;
mod kernels;

pub use axis::{Axis, ThresholdLevels};
pub use error::Error;
pub use kernels::{gc99, tent, tent_radial, tent_vertical};
