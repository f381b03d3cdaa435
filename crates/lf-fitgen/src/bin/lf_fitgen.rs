use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use plotters::prelude::*;
use serde::Serialize;

use lf_core::{Axis, ThresholdLevels, gc99};
use lf_emit::NetcdfBuilder;
use lf_emit::fortran::{ModuleConstants, render_module};
use lf_fit::{
    Direction, FitParams, FitTables, KernelTable, ScaleTable, extract_scales,
    horizontal_conv_raw_at, horizontal_sqrt_at, vertical_conv_raw_at, vertical_sqrt_at,
};

/// Relative location of the generated module inside the consuming source
/// tree; the data file sits next to it with an extra `.nc` suffix.
const MODULE_RELPATH: &str = "src/saber/bump/tools_gc99.fypp";

#[derive(Parser, Debug)]
#[command(name = "lf_fitgen")]
#[command(about = "Derive covariance-localization fit tables and emit the module, data, and plots")]
struct Cli {
    /// Source tree root that receives the generated module and data file.
    /// Plot images and run metadata land in the current working directory.
    srcdir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
struct RunMeta {
    nnd: usize,
    nscaleth: usize,
    ndmin: f64,
    ndmax: f64,
    dnd: f64,
    scalethmin: f64,
    scalethmax: f64,
    scaleth: Vec<f64>,
    scaleh: Vec<f64>,
    scalev: Vec<f64>,
    gc99: Vec<f64>,
    unconverged_hor: usize,
    unconverged_ver: usize,
    elapsed_hor_s: f64,
    elapsed_ver_s: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.srcdir.is_dir() {
        bail!("source directory does not exist: {}", cli.srcdir.display());
    }

    let params = FitParams::default();
    let axis = params.axis().context("building normalized-distance axis")?;
    let levels = params.threshold_levels().context("building threshold levels")?;

    // Reference curve for visual comparison against the tabulated fit.
    let gc99_curve: Vec<f64> = axis.values().iter().map(|&r| gc99(r)).collect();

    let start = Instant::now();
    let (horizontal, unconverged_hor) = compute_horizontal(&axis, params.epsabs_hor)?;
    let elapsed_hor = start.elapsed().as_secs_f64();
    let scaleh = extract_scales(&axis, &horizontal, &levels)
        .context("extracting horizontal scales")?;

    let start = Instant::now();
    let (vertical, unconverged_ver) = compute_vertical(&axis, params.epsabs_ver)?;
    let elapsed_ver = start.elapsed().as_secs_f64();
    let scalev = extract_scales(&axis, &vertical, &levels)
        .context("extracting vertical scales")?;

    println!("horizontal done in {elapsed_hor:.1} s ({unconverged_hor} tolerance misses)");
    println!("vertical done in {elapsed_ver:.1} s ({unconverged_ver} tolerance misses)");

    plot_direction(
        Path::new("fit_hor.png"),
        &axis,
        &horizontal,
        Some(&gc99_curve),
        0.0,
    )?;
    plot_scaled_overlays(&axis, &horizontal, &levels, &scaleh)?;
    plot_direction(Path::new("fit_ver.png"), &axis, &vertical, None, -0.5)?;

    let tables = FitTables::assemble(axis, levels, horizontal, vertical, scaleh, scalev)
        .context("assembling fit tables")?;

    emit_module(&cli.srcdir, &tables)?;
    emit_netcdf(&cli.srcdir, &tables)?;
    write_meta(
        &tables,
        &gc99_curve,
        unconverged_hor,
        unconverged_ver,
        elapsed_hor,
        elapsed_ver,
    )?;

    Ok(())
}

fn compute_horizontal(axis: &Axis, epsabs: f64) -> Result<(KernelTable, usize)> {
    let mut sqrt_values = Vec::with_capacity(axis.len());
    let mut raw_conv = Vec::with_capacity(axis.len());
    let mut unconverged = 0usize;

    for (i, &nd) in axis.values().iter().enumerate() {
        println!("horizontal: {i}");
        sqrt_values.push(horizontal_sqrt_at(nd));

        let estimate = horizontal_conv_raw_at(nd, epsabs);
        if !estimate.converged {
            unconverged += 1;
        }
        raw_conv.push(estimate.value);
    }

    let table = KernelTable::from_raw(Direction::Horizontal, sqrt_values, raw_conv)
        .context("normalizing horizontal convolution table")?;
    Ok((table, unconverged))
}

fn compute_vertical(axis: &Axis, epsabs: f64) -> Result<(KernelTable, usize)> {
    let mut sqrt_values = Vec::with_capacity(axis.len());
    let mut raw_conv = Vec::with_capacity(axis.len());
    let mut unconverged = 0usize;

    for (i, &nd) in axis.values().iter().enumerate() {
        println!("vertical: {i}");
        sqrt_values.push(vertical_sqrt_at(nd));

        let estimate = vertical_conv_raw_at(nd, epsabs);
        if !estimate.converged {
            unconverged += 1;
        }
        raw_conv.push(estimate.value);
    }

    let table = KernelTable::from_raw(Direction::Vertical, sqrt_values, raw_conv)
        .context("normalizing vertical convolution table")?;
    Ok((table, unconverged))
}

/// Side-by-side panels: the square-root function and the convolution
/// function, optionally with the analytic Gaspari-Cohn curve overlaid on
/// the convolution panel.
fn plot_direction(
    path: &Path,
    axis: &Axis,
    table: &KernelTable,
    reference: Option<&[f64]>,
    y_min: f64,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1400, 700)).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("filling {}", path.display()))?;
    let panels = root.split_evenly((1, 2));

    let nd = axis.values();

    let mut chart = ChartBuilder::on(&panels[0])
        .caption("Square-root function", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..1.0, y_min..1.1)?;
    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(
        nd.iter().copied().zip(table.sqrt_values().iter().copied()),
        &BLUE,
    ))?;

    let mut chart = ChartBuilder::on(&panels[1])
        .caption("Convolution function", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..1.0, y_min..1.1)?;
    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(
        nd.iter().copied().zip(table.conv_values().iter().copied()),
        &BLUE,
    ))?;
    if let Some(reference) = reference {
        chart.draw_series(LineSeries::new(
            nd.iter().copied().zip(reference.iter().copied()),
            &BLACK.mix(0.5),
        ))?;
    }

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// One plot per threshold level: the convolution curve over the axis
/// divided by the extracted scale, so the crossing sits at distance 1.
fn plot_scaled_overlays(
    axis: &Axis,
    table: &KernelTable,
    levels: &ThresholdLevels,
    scales: &ScaleTable,
) -> Result<()> {
    for (i, (&level, &scale)) in levels.values().iter().zip(scales.scales()).enumerate() {
        let path = PathBuf::from(format!("fit_{}_{i}.png", table.direction().tag()));

        let root = BitMapBackend::new(&path, (700, 700)).into_drawing_area();
        root.fill(&WHITE)
            .with_context(|| format!("filling {}", path.display()))?;

        let x_max = 1.0 / scale;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Scaled convolution function: {level}"),
                ("sans-serif", 24),
            )
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..x_max, 0.0..1.1)?;
        chart.configure_mesh().draw()?;
        chart.draw_series(LineSeries::new(
            axis.values()
                .iter()
                .map(|&x| x / scale)
                .zip(table.conv_values().iter().copied()),
            &BLUE,
        ))?;

        root.present()
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn emit_module(srcdir: &Path, tables: &FitTables) -> Result<()> {
    let constants = module_constants(tables);
    let text = render_module(&constants);

    let path = srcdir.join(MODULE_RELPATH);
    let dir = path.parent().expect("module path has a parent");
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))
}

fn emit_netcdf(srcdir: &Path, tables: &FitTables) -> Result<()> {
    let mut nc = NetcdfBuilder::new();
    let nnd = nc.dimension("nnd", tables.axis().len())?;
    let nscaleth = nc.dimension("nscaleth", tables.levels().len())?;

    nc.variable("scaleth", nscaleth, tables.levels().values())?;
    nc.variable(
        "scaleh",
        nscaleth,
        tables.scale_table(Direction::Horizontal).scales(),
    )?;
    nc.variable("func_hor", nnd, tables.table(Direction::Horizontal).conv_values())?;
    nc.variable(
        "scalev",
        nscaleth,
        tables.scale_table(Direction::Vertical).scales(),
    )?;
    nc.variable("func_ver", nnd, tables.table(Direction::Vertical).conv_values())?;

    let path = srcdir.join(format!("{MODULE_RELPATH}.nc"));
    fs::write(&path, nc.to_bytes()).with_context(|| format!("writing {}", path.display()))
}

fn write_meta(
    tables: &FitTables,
    gc99_curve: &[f64],
    unconverged_hor: usize,
    unconverged_ver: usize,
    elapsed_hor_s: f64,
    elapsed_ver_s: f64,
) -> Result<()> {
    let constants = module_constants(tables);
    let meta = RunMeta {
        nnd: constants.nnd,
        nscaleth: constants.nscaleth,
        ndmin: constants.ndmin,
        ndmax: constants.ndmax,
        dnd: constants.dnd,
        scalethmin: constants.scalethmin,
        scalethmax: constants.scalethmax,
        scaleth: tables.levels().values().to_vec(),
        scaleh: tables.scale_table(Direction::Horizontal).scales().to_vec(),
        scalev: tables.scale_table(Direction::Vertical).scales().to_vec(),
        gc99: gc99_curve.to_vec(),
        unconverged_hor,
        unconverged_ver,
        elapsed_hor_s,
        elapsed_ver_s,
    };

    let bytes = serde_json::to_vec_pretty(&meta).context("serializing run metadata")?;
    fs::write("fit_meta.json", bytes).context("writing fit_meta.json")
}

fn module_constants(tables: &FitTables) -> ModuleConstants {
    ModuleConstants {
        nnd: tables.axis().len(),
        nscaleth: tables.levels().len(),
        ndmin: tables.axis().min(),
        ndmax: tables.axis().max(),
        dnd: tables.axis().step(),
        scalethmin: tables.levels().min(),
        scalethmax: tables.levels().max(),
    }
}
