//! binning::tailor — burn-in removal and divisibility trimming.
//!
//! Purpose
//! -------
//! Trim a dataset to the contiguous row range used by the estimators: drop a
//! leading percentage of rows (thermalization cut) and, optionally, further
//! leading rows so that the kept count is a multiple of a target bin count.
//!
//! Key behaviors
//! -------------
//! - Compute `skip = ⌊skip_percent · R / 100⌋` with exact integer arithmetic.
//! - When a target bin count is given, drop `kept mod target` additional
//!   leading rows.
//! - Return a borrowed view of the retained rows; no copy, no reordering.
//!
//! Invariants & assumptions
//! ------------------------
//! - Rows are ordered oldest first; trimming always removes the oldest rows
//!   and keeps the most recent ones.
//! - The returned view always ends at the last row of the input.
use crate::binning::{
    errors::{BinningError, BinningResult},
    validation::{validate_bin_count, validate_skip_percent},
};
use ndarray::{ArrayView2, s};

/// Drop leading rows for burn-in removal and bin divisibility.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<'a, f64>`
///   `R × C` dataset, rows in time order.
/// - `skip_percent`: `u32`
///   Percentage (0–100) of rows to discard from the start.
/// - `target_bins`: `Option<usize>`
///   When `Some(n)`, additionally discard leading rows until the kept count
///   is a multiple of `n`.
///
/// Returns
/// -------
/// `BinningResult<ArrayView2<'a, f64>>`
///   View of the retained trailing rows.
///
/// Errors
/// ------
/// - `BinningError::InvalidSkipPercent` when `skip_percent > 100`.
/// - `BinningError::InvalidBinCount` when `target_bins == Some(0)`.
/// - `BinningError::InsufficientRows` when `target_bins` exceeds the rows
///   left after the percentage cut.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::Array2;
/// # use rust_das::binning::tailor::drop_rows;
/// let data = Array2::<f64>::zeros((119, 4));
/// let kept = drop_rows(data.view(), 20, Some(15)).unwrap();
/// assert_eq!(kept.nrows(), 90);
/// ```
pub fn drop_rows<'a>(
    data: ArrayView2<'a, f64>, skip_percent: u32, target_bins: Option<usize>,
) -> BinningResult<ArrayView2<'a, f64>> {
    validate_skip_percent(skip_percent)?;
    let rows = data.nrows();

    let mut skip = skip_percent as usize * rows / 100;
    let mut keep = rows - skip;

    if let Some(bins) = target_bins {
        validate_bin_count(bins)?;
        if bins > keep {
            return Err(BinningError::InsufficientRows { requested: bins, available: keep });
        }
        keep -= keep % bins;
        skip = rows - keep;
    }

    tracing::debug!(rows, skip, keep, ?target_bins, "tailored dataset");
    Ok(data.slice_move(s![skip.., ..]))
}
