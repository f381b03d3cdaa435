use lf_core::Error;

/// Direction a kernel table was derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Short tag used in emitted artifacts and plot names.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Horizontal => "hor",
            Self::Vertical => "ver",
        }
    }
}

/// Per-direction kernel samples over the normalized-distance axis.
///
/// `sqrt_values` holds the pointwise square-root-kernel samples and
/// `conv_values` the self-convolution samples, normalized so that
/// `conv_values[0] == 1.0` exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelTable {
    direction: Direction,
    sqrt_values: Vec<f64>,
    conv_values: Vec<f64>,
}

impl KernelTable {
    /// Builds a table from raw (unnormalized) convolution samples.
    ///
    /// Divides every convolution sample by the zero-lag value. The zero-lag
    /// value must be nonzero (it is, for any kernel whose support includes
    /// the origin).
    pub fn from_raw(
        direction: Direction,
        sqrt_values: Vec<f64>,
        raw_conv: Vec<f64>,
    ) -> Result<Self, Error> {
        if sqrt_values.len() != raw_conv.len() {
            return Err(Error::LengthMismatch {
                expected: sqrt_values.len(),
                actual: raw_conv.len(),
            });
        }
        let norm = match raw_conv.first() {
            Some(&v) if v != 0.0 => v,
            _ => return Err(Error::ZeroNormalization),
        };

        let conv_values = raw_conv.into_iter().map(|v| v / norm).collect();
        Ok(Self {
            direction,
            sqrt_values,
            conv_values,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn sqrt_values(&self) -> &[f64] {
        &self.sqrt_values
    }

    pub fn conv_values(&self) -> &[f64] {
        &self.conv_values
    }

    pub fn len(&self) -> usize {
        self.conv_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conv_values.is_empty()
    }
}

/// Extracted length scales, one per threshold level.
///
/// A scale of `1.0` is the sentinel for "no crossing found within the
/// axis"; it is also a legitimate extracted value when the crossing sits
/// exactly at the axis end.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTable {
    direction: Direction,
    scales: Vec<f64>,
}

impl ScaleTable {
    pub(crate) fn new(direction: Direction, scales: Vec<f64>) -> Self {
        Self { direction, scales }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}
