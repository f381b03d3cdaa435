//! Adaptive numerical quadrature over finite intervals and rectangles.
//!
//! ## Tolerance policy
//! Both entry points take an absolute-error tolerance `epsabs`. Refinement
//! stops once the local Richardson error estimate is within the tolerance,
//! or once the recursion depth limit is reached. A tolerance miss is never
//! an error: the best available estimate is returned with
//! [`Estimate::converged`] set to `false`, and the caller decides whether
//! to care. This mirrors how the fit pipeline consumes quadrature results
//! (best effort, inspected visually downstream).
//!
//! ## Method
//! Adaptive Simpson with interval bisection and tolerance splitting. The
//! rule is exact for cubics, so piecewise-polynomial integrands (the tent
//! self-convolutions this crate exists for) converge after the recursion
//! has isolated the kink locations.

mod adaptive;

pub use adaptive::{Estimate, integrate, integrate2d};
