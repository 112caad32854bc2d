//! binning — row tailoring, block averaging, and column statistics.
//!
//! Purpose
//! -------
//! Collect the leaf primitives of the error-estimation engine: trimming a
//! time-ordered dataset to a usable row range, reducing contiguous row groups
//! to their means, and summarizing columns by mean, SEM, and SE(SEM). The
//! drivers in `crate::drivers` compose these pieces; nothing here depends on
//! the drivers, the loader, or the output layer.
//!
//! Key behaviors
//! -------------
//! - [`drop_rows`] removes the burn-in prefix and, optionally, extra leading
//!   rows so the kept count divides a target bin count.
//! - [`rebin`] replaces each of `n` equal contiguous row groups with its
//!   column means.
//! - [`get_stats`] computes [`Stats`] from `N ≥ 2` rows.
//! - [`ScalingOptions`] configures the bin-count halving schedule shared by
//!   the bin-scaling and jackknife drivers.
//! - [`BinningError`] / [`BinningResult`] form the single error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Datasets are rectangular `f64` matrices, rows in time order (oldest
//!   first), borrowed as `ndarray::ArrayView2`. No routine mutates its input.
//! - Inputs are assumed finite; the loader rejects non-numeric cells before
//!   data reach this module.
//!
//! Conventions
//! -----------
//! - Rows index time, columns index observables.
//! - Counts (rows, bins, bin sizes) are `usize`; skip percentages are `u32`.
//! - Routines log at `debug` level through `tracing` and never print.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its formulas and error paths.
//! - Driver-level and end-to-end behavior is covered in `crate::drivers` and
//!   in `tests/integration_binning_pipeline.rs`.

pub mod errors;
pub mod options;
pub mod rebin;
pub mod report;
pub mod stats;
pub mod tailor;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{BinningError, BinningResult};
pub use self::options::ScalingOptions;
pub use self::rebin::rebin;
pub use self::report::Report;
pub use self::stats::{BinnedEntry, BinnedStats, ColumnSummary, Stats, get_stats};
pub use self::tailor::drop_rows;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_das::binning::prelude::*;
//
// to import the binning surface in a single line.

pub mod prelude {
    pub use super::errors::{BinningError, BinningResult};
    pub use super::options::ScalingOptions;
    pub use super::rebin::rebin;
    pub use super::report::Report;
    pub use super::stats::{BinnedEntry, BinnedStats, ColumnSummary, Stats, get_stats};
    pub use super::tailor::drop_rows;
}
