use crate::Error;

/// Uniform normalized-distance sample axis over `[0, 1]`.
///
/// Samples are `i / (len - 1)` for `i in 0..len`, so the axis is strictly
/// increasing, starts at exactly `0.0`, and ends at exactly `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    values: Vec<f64>,
    step: f64,
}

impl Axis {
    /// Builds a uniform axis with `len` samples. Requires `len >= 2`.
    pub fn with_samples(len: usize) -> Result<Self, Error> {
        if len < 2 {
            return Err(Error::AxisTooShort { len });
        }

        let step = 1.0 / (len - 1) as f64;
        let values = (0..len).map(|i| i as f64 / (len - 1) as f64).collect();
        Ok(Self { values, step })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn min(&self) -> f64 {
        self.values[0]
    }

    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

/// Ordered correlation threshold levels at which length scales are extracted.
///
/// The level count is `floor((max - min) / step + 1e-6) + 1`: the slack term
/// keeps ranges whose width is not exactly representable in binary (such as
/// `[0.2, 0.9]` at step `0.1`) from losing their last level. Samples are then
/// placed uniformly between `min` and `max` inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdLevels {
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl ThresholdLevels {
    pub fn with_range(min: f64, max: f64, step: f64) -> Result<Self, Error> {
        if !(step > 0.0) || max < min || !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidThresholdRange { min, max, step });
        }

        let count = ((max - min) / step + 1.0e-6).floor() as usize + 1;
        let values = if count == 1 {
            vec![min]
        } else {
            (0..count)
                .map(|i| min + (max - min) * i as f64 / (count - 1) as f64)
                .collect()
        };

        Ok(Self { values, min, max })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
