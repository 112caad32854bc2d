//! binning::rebin — block averaging of contiguous row groups.
//!
//! Purpose
//! -------
//! Reduce an `R × C` dataset to `n × C` by splitting the rows into `n`
//! contiguous, equal-length groups and replacing each group with its
//! column-wise mean. Averaging within a group washes out short-range serial
//! correlation, so the `n` bin means are closer to independent samples.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input must split exactly: `n ≤ R` and `R mod n = 0`. Callers obtain
//!   such inputs from `tailor::drop_rows` with a matching target.
//! - Output row `b` is the mean of input rows `b·size .. (b+1)·size`, where
//!   `size = R / n`; bin order follows row order.
//! - The mean over all output rows equals the mean over all input rows.
use crate::binning::{errors::BinningResult, validation::validate_binning_shape};
use ndarray::{Array2, ArrayView2, Axis};

/// Rebin `data` into `bins` contiguous groups of equal size.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   `R × C` dataset, rows in time order.
/// - `bins`: `usize`
///   Number of groups; must satisfy `1 ≤ bins ≤ R` and `R mod bins = 0`.
///
/// Returns
/// -------
/// `BinningResult<Array2<f64>>`
///   `bins × C` array of group means.
///
/// Errors
/// ------
/// - `BinningError::InvalidBinCount` when `bins == 0`.
/// - `BinningError::InsufficientRowsForBinning` when `bins > R`.
/// - `BinningError::LeftoverRows` when `R mod bins != 0`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_das::binning::rebin::rebin;
/// let data = array![[1.0], [3.0], [5.0], [7.0]];
/// let binned = rebin(data.view(), 2).unwrap();
/// assert_eq!(binned, array![[2.0], [6.0]]);
/// ```
pub fn rebin(data: ArrayView2<'_, f64>, bins: usize) -> BinningResult<Array2<f64>> {
    validate_binning_shape(data.nrows(), bins)?;
    let size = data.nrows() / bins;
    let scale = 1.0 / size as f64;

    let mut binned = Array2::<f64>::zeros((bins, data.ncols()));
    for (mut out, group) in binned.outer_iter_mut().zip(data.axis_chunks_iter(Axis(0), size)) {
        out.assign(&group.sum_axis(Axis(0)));
        out *= scale;
    }
    Ok(binned)
}
