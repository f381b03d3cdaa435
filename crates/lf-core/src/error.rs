use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    AxisTooShort { len: usize },
    InvalidThresholdRange { min: f64, max: f64, step: f64 },
    ZeroNormalization,
    NegativeDistance { value: f64 },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisTooShort { len } => {
                write!(f, "axis needs at least 2 samples, got {len}")
            }
            Self::InvalidThresholdRange { min, max, step } => {
                write!(f, "invalid threshold range: min={min}, max={max}, step={step}")
            }
            Self::ZeroNormalization => write!(f, "zero-lag convolution value is zero"),
            Self::NegativeDistance { value } => {
                write!(f, "negative normalized distance: {value}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for Error {}
