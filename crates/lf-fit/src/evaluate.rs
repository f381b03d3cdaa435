use lf_core::{Axis, Error, tent, tent_radial, tent_vertical};
use lf_quad::{Estimate, integrate, integrate2d};

use crate::table::{Direction, KernelTable};

/// Pointwise horizontal square-root-kernel sample.
#[inline]
pub fn horizontal_sqrt_at(nd: f64) -> f64 {
    tent(nd)
}

/// Pointwise vertical square-root-kernel sample.
///
/// The division by the origin value is a no-op since `tent_vertical(0)` is
/// one; the explicit normalization keeps the floating-point sequence fixed
/// should the kernel ever change.
#[inline]
pub fn vertical_sqrt_at(nd: f64) -> f64 {
    tent_vertical(nd) / tent_vertical(0.0)
}

/// Raw (unnormalized) horizontal self-convolution sample at lag `nd`:
/// the 2D integral of `tent_radial(x, y) * tent_radial(nd - x, y)` over
/// `[-1/2, 1/2]^2`.
pub fn horizontal_conv_raw_at(nd: f64, epsabs: f64) -> Estimate {
    integrate2d(
        |x, y| tent_radial(x, y) * tent_radial(nd - x, y),
        -0.5,
        0.5,
        -0.5,
        0.5,
        epsabs,
    )
}

/// Raw (unnormalized) vertical self-convolution sample at lag `nd`:
/// the 1D integral of `tent_vertical(z) * tent_vertical(nd - z)` over
/// `[-1/2, 1/2]`.
pub fn vertical_conv_raw_at(nd: f64, epsabs: f64) -> Estimate {
    integrate(
        |z| tent_vertical(z) * tent_vertical(nd - z),
        -0.5,
        0.5,
        epsabs,
    )
}

/// Computes the full horizontal kernel table over `axis`.
///
/// Unconverged quadrature estimates are used as-is; the tolerance is a
/// target, not a guarantee.
pub fn horizontal_table(axis: &Axis, epsabs: f64) -> Result<KernelTable, Error> {
    let sqrt_values = axis.values().iter().map(|&x| horizontal_sqrt_at(x)).collect();
    let raw_conv = axis
        .values()
        .iter()
        .map(|&x| horizontal_conv_raw_at(x, epsabs).value)
        .collect();
    KernelTable::from_raw(Direction::Horizontal, sqrt_values, raw_conv)
}

/// Computes the full vertical kernel table over `axis`.
pub fn vertical_table(axis: &Axis, epsabs: f64) -> Result<KernelTable, Error> {
    let sqrt_values = axis.values().iter().map(|&x| vertical_sqrt_at(x)).collect();
    let raw_conv = axis
        .values()
        .iter()
        .map(|&x| vertical_conv_raw_at(x, epsabs).value)
        .collect();
    KernelTable::from_raw(Direction::Vertical, sqrt_values, raw_conv)
}
