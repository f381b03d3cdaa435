use core::cell::Cell;

/// Hard cap on bisection depth. At depth 40 the subinterval width is below
/// `(b - a) * 2^-40`, well under f64 resolution for unit-scale intervals.
const MAX_DEPTH: u32 = 40;

/// Result of an adaptive integration: the best available value plus whether
/// every subinterval met its share of the requested tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub converged: bool,
}

/// Integrates `f` over `[a, b]` with absolute-error tolerance `epsabs`.
///
/// Never fails: on tolerance miss the deepest available refinement is
/// returned with `converged == false`.
pub fn integrate<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, epsabs: f64) -> Estimate {
    if a == b {
        return Estimate {
            value: 0.0,
            converged: true,
        };
    }

    let m = 0.5 * (a + b);
    let fa = f(a);
    let fm = f(m);
    let fb = f(b);
    let whole = (b - a) / 6.0 * (fa + 4.0 * fm + fb);
    refine(&f, a, b, fa, fm, fb, whole, epsabs.abs(), MAX_DEPTH)
}

/// Integrates `f(x, y)` over `[x0, x1] x [y0, y1]` with absolute-error
/// tolerance `epsabs`.
///
/// The outer integral over `x` and each inner integral over `y` use the
/// same tolerance; the result is flagged unconverged if either level missed
/// its tolerance anywhere.
pub fn integrate2d<F: Fn(f64, f64) -> f64>(
    f: F,
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    epsabs: f64,
) -> Estimate {
    let inner_converged = Cell::new(true);

    let outer = integrate(
        |x| {
            let inner = integrate(|y| f(x, y), y0, y1, epsabs);
            if !inner.converged {
                inner_converged.set(false);
            }
            inner.value
        },
        x0,
        x1,
        epsabs,
    );

    Estimate {
        value: outer.value,
        converged: outer.converged && inner_converged.get(),
    }
}

#[allow(clippy::too_many_arguments)]
fn refine<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    epsabs: f64,
    depth: u32,
) -> Estimate {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);

    let left = (m - a) / 6.0 * (fa + 4.0 * flm + fm);
    let right = (b - m) / 6.0 * (fm + 4.0 * frm + fb);
    let delta = left + right - whole;

    // Richardson extrapolation: Simpson error shrinks 16x per bisection,
    // so delta/15 estimates the remaining error of left + right.
    if delta.abs() <= 15.0 * epsabs {
        return Estimate {
            value: left + right + delta / 15.0,
            converged: true,
        };
    }
    if depth == 0 {
        return Estimate {
            value: left + right + delta / 15.0,
            converged: false,
        };
    }

    let l = refine(f, a, m, fa, flm, fm, left, 0.5 * epsabs, depth - 1);
    let r = refine(f, m, b, fm, frm, fb, right, 0.5 * epsabs, depth - 1);
    Estimate {
        value: l.value + r.value,
        converged: l.converged && r.converged,
    }
}
