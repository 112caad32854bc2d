//! drivers::avs — simple average without rebinning.
use crate::binning::{
    errors::BinningResult,
    report::Report,
    stats::{Stats, get_stats},
    tailor::drop_rows,
};
use ndarray::ArrayView2;

/// Simple average of every column after the burn-in cut.
///
/// Every kept row counts as one independent sample, so the SEM is
/// understated when rows are serially correlated; [`ave`] detects that.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   `R × C` dataset, rows in time order.
/// - `skip_percent`: `u32`
///   Percentage (0–100) of leading rows to discard.
///
/// Returns
/// -------
/// `BinningResult<(Stats, Report)>`
///   Per-column summary of the kept rows and the kept/total row counts.
///
/// Errors
/// ------
/// - `BinningError::InvalidSkipPercent` when `skip_percent > 100`.
/// - `BinningError::InsufficientRows` when fewer than two rows are kept.
///
/// [`ave`]: crate::drivers::ave::ave
pub fn avs(data: ArrayView2<'_, f64>, skip_percent: u32) -> BinningResult<(Stats, Report)> {
    let total = data.nrows();
    let kept = drop_rows(data, skip_percent, None)?;
    let report = Report::new(kept.nrows(), total);
    tracing::debug!(%report, columns = kept.ncols(), "simple average");

    let stats = get_stats(kept)?;
    Ok((stats, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::errors::BinningError;
    use ndarray::{Array2, array, s};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A zero skip leaving the dataset untouched.
    // - The percentage cut feeding `get_stats` and the report.
    // - Propagation of errors from tailoring and statistics.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A 0% skip must be a no-op: `avs` equals `get_stats` on the full input.
    //
    // Given
    // -----
    // - A 5 × 2 dataset.
    //
    // Expect
    // ------
    // - Identical `Stats`; report "5/5 rows".
    fn avs_zero_skip_equals_get_stats() {
        // Arrange
        let data = array![[1.0, 10.0], [2.0, 20.0], [4.0, 15.0], [8.0, 11.0], [3.0, 12.5]];

        // Act
        let (stats, report) = avs(data.view(), 0).unwrap();

        // Assert
        assert_eq!(stats, get_stats(data.view()).unwrap());
        assert_eq!(report.to_string(), "5/5 rows");
    }

    #[test]
    // Purpose
    // -------
    // The statistics must be computed on the trailing rows only.
    //
    // Given
    // -----
    // - 10 rows, skip 30%.
    //
    // Expect
    // ------
    // - Same result as `get_stats` on rows 3..10; report "7/10 rows".
    fn avs_uses_rows_after_cut() {
        let data = Array2::from_shape_fn((10, 3), |(i, j)| ((i * i) as f64) - j as f64);

        let (stats, report) = avs(data.view(), 30).unwrap();

        assert_eq!(stats, get_stats(data.slice(s![3.., ..])).unwrap());
        assert_eq!(report, Report::new(7, 10));
    }

    #[test]
    fn avs_propagates_tailoring_and_stats_errors() {
        let data = Array2::<f64>::zeros((4, 2));

        assert_eq!(
            avs(data.view(), 101).unwrap_err(),
            BinningError::InvalidSkipPercent { percent: 101 }
        );
        assert_eq!(
            avs(data.view(), 100).unwrap_err(),
            BinningError::InsufficientRows { requested: 2, available: 0 }
        );
    }
}
