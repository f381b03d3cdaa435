//! Emission of the two downstream artifacts of a fit derivation run.
//!
//! Both emitters are pure: they produce bytes or text, and the caller owns
//! all filesystem I/O.
//!
//! ## NetCDF classic writer
//! [`NetcdfBuilder`] serializes named dimensions and rank-1 double
//! variables into the NetCDF classic (CDF-1, 32-bit offset) container,
//! big-endian throughout, with no attributes and no record dimension. The
//! format is small and fully specified, so a self-contained writer keeps
//! the toolchain free of a C library binding for a five-variable file.
//!
//! ## Fortran module renderer
//! [`fortran::render_module`] renders the consuming library's lookup
//! module from an embedded template, substituting the numeric header
//! constants. The module text is a boundary contract: its constants must
//! match the binary artifact exactly, and its interpolation semantics are
//! the ones `lf-fit` implements natively.

mod error;
pub mod fortran;
mod netcdf;

pub use error::EmitError;
pub use netcdf::NetcdfBuilder;
