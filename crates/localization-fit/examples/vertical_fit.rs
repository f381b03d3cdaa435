//! Example: derive the vertical fit table and print its extracted scales.
//!
//! The vertical direction uses 1D quadrature, so the whole derivation runs
//! in well under a second. Scales are printed per threshold level along
//! with total timing.
//!
//! Run from the workspace root:
//!   cargo run -p localization-fit --example vertical_fit

use std::time::Instant;

use anyhow::Result;
use localization_fit::{FitParams, extract_scales, vertical_table};

fn main() -> Result<()> {
    let params = FitParams::default();
    let axis = params.axis()?;
    let levels = params.threshold_levels()?;

    let start = Instant::now();
    let table = vertical_table(&axis, params.epsabs_ver)?;
    let scales = extract_scales(&axis, &table, &levels)?;
    let elapsed = start.elapsed();

    println!("vertical fit over {} axis samples in {elapsed:.2?}", axis.len());
    for (level, scale) in levels.values().iter().zip(scales.scales()) {
        println!("  level {level:.1} -> scale {scale:.6}");
    }

    Ok(())
}
