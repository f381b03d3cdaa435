/// Triangular "tent" pulse of half-width `0.5` and unit height.
///
/// `tent(r) = 1 - 2|r|` for `|r| <= 0.5`, zero elsewhere. Even, compactly
/// supported, defined for all reals.
#[inline]
pub fn tent(r: f64) -> f64 {
    if r.abs() <= 0.5 { 1.0 - 2.0 * r.abs() } else { 0.0 }
}

/// Radial extension of the tent pulse into 2D: `tent(sqrt(x^2 + y^2))`.
#[inline]
pub fn tent_radial(x: f64, y: f64) -> f64 {
    tent((x * x + y * y).sqrt())
}

/// Vertical (1D) tent kernel.
///
/// Identity alias of [`tent`], kept as a distinct operation for directional
/// symmetry with [`tent_radial`].
#[inline]
pub fn tent_vertical(z: f64) -> f64 {
    tent(z)
}

/// Gaspari and Cohn (1999) fifth-order piecewise-polynomial correlation
/// function, compactly supported on `[0, 1)`.
///
/// Both branches use a nested (Horner-style) evaluation so results are
/// bit-stable across platforms with strict f64 semantics.
pub fn gc99(r: f64) -> f64 {
    if r < 0.5 {
        let mut value = 1.0 - r;
        value = 1.0 + 8.0 / 5.0 * r * value;
        value = 1.0 - 3.0 / 4.0 * r * value;
        value = 1.0 - 20.0 / 3.0 * r * r * value;
        value
    } else if r < 1.0 {
        let mut value = 1.0 - r / 3.0;
        value = 1.0 - 8.0 / 5.0 * r * value;
        value = 1.0 + 3.0 / 4.0 * r * value;
        value = 1.0 - 2.0 / 3.0 * r * value;
        value = 1.0 - 5.0 / 2.0 * r * value;
        value = 1.0 - 12.0 * r * value;
        -value / (3.0 * r)
    } else {
        0.0
    }
}
