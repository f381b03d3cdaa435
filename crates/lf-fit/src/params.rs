use lf_core::{Axis, Error, ThresholdLevels};

/// Fixed parameter set of a fit derivation run.
///
/// The 2D horizontal quadrature tolerance is deliberately looser than the
/// 1D vertical one: adaptive quadrature cost grows sharply with dimension
/// and the horizontal table is the dominant cost of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct FitParams {
    /// Sample count of the normalized-distance axis.
    pub axis_samples: usize,
    /// Absolute-error tolerance for the 2D horizontal convolution.
    pub epsabs_hor: f64,
    /// Absolute-error tolerance for the 1D vertical convolution.
    pub epsabs_ver: f64,
    pub scaleth_min: f64,
    pub scaleth_max: f64,
    pub scaleth_step: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            axis_samples: 51,
            epsabs_hor: 1.0e-2,
            epsabs_ver: 1.0e-4,
            scaleth_min: 0.2,
            scaleth_max: 0.9,
            scaleth_step: 0.1,
        }
    }
}

impl FitParams {
    pub fn axis(&self) -> Result<Axis, Error> {
        Axis::with_samples(self.axis_samples)
    }

    pub fn threshold_levels(&self) -> Result<ThresholdLevels, Error> {
        ThresholdLevels::with_range(self.scaleth_min, self.scaleth_max, self.scaleth_step)
    }
}
