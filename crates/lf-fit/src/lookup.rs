use lf_core::{Axis, Error, ThresholdLevels};

use crate::table::{Direction, KernelTable, ScaleTable};

/// Finished fit tables for both directions, plus the lookup semantics the
/// generated Fortran module documents.
///
/// `value` returns exactly `1` at distance `0` and exactly `0` beyond
/// distance `1`; in between it linearly interpolates the two bracketing
/// tabulated convolution samples. Negative distances are invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct FitTables {
    axis: Axis,
    levels: ThresholdLevels,
    horizontal: KernelTable,
    vertical: KernelTable,
    horizontal_scales: ScaleTable,
    vertical_scales: ScaleTable,
}

impl FitTables {
    pub fn assemble(
        axis: Axis,
        levels: ThresholdLevels,
        horizontal: KernelTable,
        vertical: KernelTable,
        horizontal_scales: ScaleTable,
        vertical_scales: ScaleTable,
    ) -> Result<Self, Error> {
        for len in [horizontal.len(), vertical.len()] {
            if len != axis.len() {
                return Err(Error::LengthMismatch {
                    expected: axis.len(),
                    actual: len,
                });
            }
        }
        for len in [horizontal_scales.len(), vertical_scales.len()] {
            if len != levels.len() {
                return Err(Error::LengthMismatch {
                    expected: levels.len(),
                    actual: len,
                });
            }
        }

        Ok(Self {
            axis,
            levels,
            horizontal,
            vertical,
            horizontal_scales,
            vertical_scales,
        })
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub fn levels(&self) -> &ThresholdLevels {
        &self.levels
    }

    pub fn table(&self, direction: Direction) -> &KernelTable {
        match direction {
            Direction::Horizontal => &self.horizontal,
            Direction::Vertical => &self.vertical,
        }
    }

    pub fn scale_table(&self, direction: Direction) -> &ScaleTable {
        match direction {
            Direction::Horizontal => &self.horizontal_scales,
            Direction::Vertical => &self.vertical_scales,
        }
    }

    /// Tabulated fit-function value at a non-negative normalized distance.
    pub fn value(&self, direction: Direction, nd: f64) -> Result<f64, Error> {
        if nd < 0.0 {
            return Err(Error::NegativeDistance { value: nd });
        }
        if nd == 0.0 {
            return Ok(1.0);
        }
        if nd > 1.0 {
            return Ok(0.0);
        }

        let dnd = self.axis.step();
        let bnd = nd.clamp(self.axis.min(), self.axis.max());
        let last = self.axis.len() - 1;
        let im = ((bnd / dnd).floor() as usize).min(last);
        let (ip, wm) = if im == last {
            (im, 1.0)
        } else {
            (im + 1, (im + 1) as f64 - bnd / dnd)
        };
        let wp = 1.0 - wm;

        let conv = self.table(direction).conv_values();
        Ok(wm * conv[im] + wp * conv[ip])
    }

    /// Square-root-form fit value at a non-negative normalized distance:
    /// `1 - 2 * nd` within the half-width support, zero beyond.
    pub fn sqrt_value(nd: f64) -> Result<f64, Error> {
        if nd < 0.0 {
            return Err(Error::NegativeDistance { value: nd });
        }
        if nd == 0.0 {
            return Ok(1.0);
        }
        if nd > 0.5 {
            return Ok(0.0);
        }
        Ok(1.0 - 2.0 * nd)
    }
}
