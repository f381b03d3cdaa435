use lf_core::{Axis, Error, ThresholdLevels};

use crate::table::{KernelTable, ScaleTable};

/// Inverse-maps each threshold level to the normalized distance where the
/// convolution curve crosses it.
///
/// The scan walks axis indices in increasing order and takes the first
/// strict crossing `conv[i] > level && conv[i + 1] < level`, interpolating
/// the crossing distance linearly between the two samples. Quadrature noise
/// can produce several crossings; the first in index order wins, by design.
/// A level with no crossing keeps the sentinel scale `1.0`.
pub fn extract_scales(
    axis: &Axis,
    table: &KernelTable,
    levels: &ThresholdLevels,
) -> Result<ScaleTable, Error> {
    if table.len() != axis.len() {
        return Err(Error::LengthMismatch {
            expected: axis.len(),
            actual: table.len(),
        });
    }

    let nd = axis.values();
    let conv = table.conv_values();

    let scales = levels
        .values()
        .iter()
        .map(|&level| {
            let mut scale = 1.0;
            for i in 0..conv.len() - 1 {
                if conv[i] > level && conv[i + 1] < level {
                    let a = (conv[i] - conv[i + 1]) / (nd[i] - nd[i + 1]);
                    let b = conv[i] - a * nd[i];
                    scale = (level - b) / a;
                    break;
                }
            }
            scale
        })
        .collect();

    Ok(ScaleTable::new(table.direction(), scales))
}

#[cfg(test)]
mod tests {
    use lf_core::{Axis, ThresholdLevels};

    use super::extract_scales;
    use crate::table::{Direction, KernelTable};

    fn table_from_conv(conv: Vec<f64>) -> KernelTable {
        let sqrt_values = vec![0.0; conv.len()];
        KernelTable::from_raw(Direction::Vertical, sqrt_values, conv).expect("valid table")
    }

    #[test]
    fn interpolated_crossing_matches_closed_form() {
        // axis [0, 0.25, 0.5, 0.75, 1.0], conv [1.0, 0.8, 0.4, 0.1, 0.0].
        // Level 0.5 crosses between 0.8 and 0.4:
        // slope -1.6, intercept 1.2, crossing (0.5 - 1.2) / -1.6 = 0.4375.
        let axis = Axis::with_samples(5).expect("valid axis");
        let table = table_from_conv(vec![1.0, 0.8, 0.4, 0.1, 0.0]);
        let levels = ThresholdLevels::with_range(0.5, 0.5, 0.1).expect("valid levels");

        let scales = extract_scales(&axis, &table, &levels).expect("valid extraction");
        assert!((scales.scales()[0] - 0.4375).abs() < 1e-12);
    }

    #[test]
    fn crossing_in_last_interval() {
        // Level 0.05 crosses between 0.1 and 0.0:
        // 0.75 + (0.1 - 0.05) / (0.1 - 0.0) * 0.25 = 0.875.
        let axis = Axis::with_samples(5).expect("valid axis");
        let table = table_from_conv(vec![1.0, 0.8, 0.4, 0.1, 0.0]);
        let levels = ThresholdLevels::with_range(0.05, 0.05, 0.1).expect("valid levels");

        let scales = extract_scales(&axis, &table, &levels).expect("valid extraction");
        assert!((scales.scales()[0] - 0.875).abs() < 1e-12);
    }

    #[test]
    fn level_above_curve_keeps_sentinel() {
        // 0.95 exceeds every sample after the origin: no strict crossing.
        let axis = Axis::with_samples(5).expect("valid axis");
        let table = table_from_conv(vec![1.0, 0.8, 0.4, 0.1, 0.0]);
        let levels = ThresholdLevels::with_range(0.95, 0.95, 0.1).expect("valid levels");

        let scales = extract_scales(&axis, &table, &levels).expect("valid extraction");
        assert_eq!(scales.scales()[0], 1.0);
    }

    #[test]
    fn first_crossing_wins_on_non_monotone_curve() {
        // Noise bump creates a second crossing of 0.5; only the first
        // (between indices 1 and 2) may be used.
        let axis = Axis::with_samples(5).expect("valid axis");
        let table = table_from_conv(vec![1.0, 0.8, 0.4, 0.6, 0.0]);
        let levels = ThresholdLevels::with_range(0.5, 0.5, 0.1).expect("valid levels");

        let scales = extract_scales(&axis, &table, &levels).expect("valid extraction");
        assert!((scales.scales()[0] - 0.4375).abs() < 1e-12);
    }

    #[test]
    fn touching_without_crossing_is_not_a_crossing() {
        // The curve touches 0.5 exactly at two samples; no interval
        // satisfies the strict bracket, so the sentinel remains.
        let axis = Axis::with_samples(5).expect("valid axis");
        let table = table_from_conv(vec![1.0, 0.5, 0.5, 0.25, 0.0]);
        let levels = ThresholdLevels::with_range(0.5, 0.5, 0.1).expect("valid levels");

        let scales = extract_scales(&axis, &table, &levels).expect("valid extraction");
        assert_eq!(scales.scales()[0], 1.0);
    }

    #[test]
    fn scale_count_matches_level_count() {
        let axis = Axis::with_samples(5).expect("valid axis");
        let table = table_from_conv(vec![1.0, 0.8, 0.4, 0.1, 0.0]);
        let levels = ThresholdLevels::with_range(0.2, 0.9, 0.1).expect("valid levels");

        let scales = extract_scales(&axis, &table, &levels).expect("valid extraction");
        assert_eq!(scales.len(), levels.len());
        for &s in scales.scales() {
            assert!(s > 0.0 && s <= 1.0);
        }
    }
}
