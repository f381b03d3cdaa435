//! Umbrella crate for the `localization-fit` workspace.
//!
//! Re-exports the numeric core: axis and kernel primitives, adaptive
//! quadrature, and the fit-table pipeline. Artifact emission lives in
//! `lf-emit` and the command-line driver in `lf-fitgen`.

pub use lf_core::*;
pub use lf_fit::*;
pub use lf_quad::{Estimate, integrate, integrate2d};
