//! Kernel-fit derivation pipeline for covariance localization.
//!
//! The pipeline is a linear compute-then-emit flow over immutable value
//! objects:
//!
//! 1. [`FitParams`] builds the normalized-distance [`Axis`](lf_core::Axis)
//!    and the [`ThresholdLevels`](lf_core::ThresholdLevels).
//! 2. The kernel evaluator ([`horizontal_table`], [`vertical_table`])
//!    computes per-direction [`KernelTable`]s: pointwise square-root-kernel
//!    samples plus the normalized self-convolution of the tent kernel,
//!    integrated numerically (2D for horizontal, 1D for vertical).
//! 3. The scale extractor ([`extract_scales`]) inverse-maps each threshold
//!    level to the normalized distance where the convolution curve crosses
//!    it, by linear interpolation between bracketing samples.
//!
//! [`FitTables`] bundles the finished tables and implements the lookup
//! semantics that the generated Fortran module documents, so the emitted
//! contract is testable natively.

mod evaluate;
mod extract;
mod lookup;
mod params;
mod table;

pub use evaluate::{
    horizontal_conv_raw_at, horizontal_sqrt_at, horizontal_table, vertical_conv_raw_at,
    vertical_sqrt_at, vertical_table,
};
pub use extract::extract_scales;
pub use lookup::FitTables;
pub use params::FitParams;
pub use table::{Direction, KernelTable, ScaleTable};
