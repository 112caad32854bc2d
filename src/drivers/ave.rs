//! drivers::ave — bin-scaling analysis and autocorrelation time.
//!
//! Purpose
//! -------
//! Show how each column's SEM evolves as contiguous rows are grouped into
//! ever larger bins. For serially correlated data the SEM rises with bin
//! size and levels off once bins are longer than the correlation length; a
//! series that keeps rising means the bins are still too short.
//!
//! Key behaviors
//! -------------
//! - Tailor the data so the kept row count is a multiple of `max_bins`.
//! - For every bin count `n` of the halving schedule, rebin the tailored
//!   rows into `n` groups of `b = kept / n` rows and record mean, SEM, and
//!   SE(SEM) per column.
//! - Optionally estimate the integrated autocorrelation time per column,
//!   `τ = (max_n sem_n / sem_unbinned)² / 2`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every [`BinnedStats`] has one entry per scale, largest bin count first,
//!   and `bin_count · bin_size == kept` at every entry.
//! - Means do not depend on the bin count, up to rounding.
//! - A column with zero unbinned SEM (a constant column) yields a
//!   non-finite τ under IEEE division; no error is raised.
//!
//! Testing notes
//! -------------
//! - Unit tests below check the schedule, the size invariant, τ on
//!   uncorrelated and perfectly block-correlated data, and error paths.
//! - `tests/integration_binning_pipeline.rs` runs the driver on a large
//!   synthetic AR(1) dataset and checks growth and plateau of the SEM.
use crate::binning::{
    errors::BinningResult,
    options::ScalingOptions,
    rebin::rebin,
    report::Report,
    stats::{BinnedEntry, BinnedStats, get_stats},
    tailor::drop_rows,
};
use ndarray::ArrayView2;

/// Bin-scaling analysis of every column.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   `R × C` dataset, rows in time order.
/// - `skip_percent`: `u32`
///   Percentage (0–100) of leading rows to discard before tailoring to a
///   multiple of `options.max_bins()`.
/// - `compute_actime`: `bool`
///   Whether to estimate the autocorrelation time of each column.
/// - `options`: `&ScalingOptions`
///   Halving schedule; [`ScalingOptions::default`] gives 1024 → 64.
///
/// Returns
/// -------
/// `BinningResult<(Vec<BinnedStats>, Vec<f64>, Report)>`
///   - one [`BinnedStats`] per column;
///   - one autocorrelation time per column, or an empty vector when
///     `compute_actime` is `false`;
///   - the kept/total row counts.
///
/// Errors
/// ------
/// - `BinningError::InvalidSkipPercent` when `skip_percent > 100`.
/// - `BinningError::InsufficientRows` when fewer than `max_bins` rows are
///   left after the percentage cut.
pub fn ave(
    data: ArrayView2<'_, f64>, skip_percent: u32, compute_actime: bool, options: &ScalingOptions,
) -> BinningResult<(Vec<BinnedStats>, Vec<f64>, Report)> {
    let total = data.nrows();
    let kept = drop_rows(data, skip_percent, Some(options.max_bins()))?;
    let rows = kept.nrows();
    let report = Report::new(rows, total);
    tracing::debug!(%report, max_bins = options.max_bins(), min_bins = options.min_bins(),
        "bin-scaling analysis");

    let mut columns = vec![BinnedStats::with_capacity(options.scale_count()); kept.ncols()];
    for bins in options.bin_counts() {
        let bin_size = rows / bins;
        let stats = get_stats(rebin(kept, bins)?.view())?;
        for (column, summary) in columns.iter_mut().zip(stats.iter()) {
            column.push(BinnedEntry::new(bins, bin_size, *summary));
        }
        tracing::debug!(bins, bin_size, "scale done");
    }

    let actimes = if compute_actime {
        let unbinned = get_stats(kept)?;
        columns
            .iter()
            .zip(unbinned.iter())
            .map(|(binned, summary)| autocorrelation_time(binned, summary.sem))
            .collect()
    } else {
        Vec::new()
    };

    Ok((columns, actimes, report))
}

/// Ratio-of-variances estimate of the integrated autocorrelation time.
///
/// Returns `(max_sem / unbinned_sem)² / 2`, where `max_sem` is the largest
/// SEM over all scales of `binned`; `NaN` when `binned` is empty.
///
/// Examples
/// --------
/// ```rust
/// # use rust_das::binning::stats::{BinnedEntry, BinnedStats, ColumnSummary};
/// # use rust_das::drivers::ave::autocorrelation_time;
/// let mut binned = BinnedStats::default();
/// binned.push(BinnedEntry::new(64, 4, ColumnSummary { mean: 0.0, sem: 2.0, se_of_sem: 0.1 }));
/// assert_eq!(autocorrelation_time(&binned, 1.0), 2.0);
/// ```
pub fn autocorrelation_time(binned: &BinnedStats, unbinned_sem: f64) -> f64 {
    binned.max_sem().map_or(f64::NAN, |max_sem| {
        let ratio = max_sem / unbinned_sem;
        ratio * ratio / 2.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::errors::BinningError;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The halving schedule and the `bin_count · bin_size == kept` invariant.
    // - Scale-independence of the binned means.
    // - The autocorrelation-time estimate on uncorrelated and on perfectly
    //   block-correlated data.
    // - Error propagation from tailoring.
    //
    // Small schedules (16 → 4) keep the fixtures short.
    // -------------------------------------------------------------------------

    fn small_options() -> ScalingOptions {
        ScalingOptions::new(16, 4).unwrap()
    }

    // Deterministic, non-trivial values without obvious structure.
    fn make_pseudo_noise(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(i, j)| {
            let x = ((i * 7919 + j * 104_729) % 1013) as f64;
            (x * 0.618_033_988_75).fract() - 0.5 + j as f64
        })
    }

    #[test]
    // Purpose
    // -------
    // Check the schedule and the size invariant with the default options.
    //
    // Given
    // -----
    // - 40497 rows, 2 columns, skip 20%.
    //
    // Expect
    // ------
    // - Report "31744/40497 rows".
    // - Bin counts [1024, 512, 256, 128, 64], sizes [31, 62, 124, 248, 496].
    // - `bin_count · bin_size == 31744` at every entry; no actimes.
    fn ave_default_schedule_matches_kept_rows() {
        // Arrange
        let data = make_pseudo_noise(40497, 2);

        // Act
        let (columns, actimes, report) =
            ave(data.view(), 20, false, &ScalingOptions::default()).unwrap();

        // Assert
        assert_eq!(report.to_string(), "31744/40497 rows");
        assert!(actimes.is_empty());
        assert_eq!(columns.len(), 2);
        for column in &columns {
            assert_eq!(column.bin_counts(), vec![1024, 512, 256, 128, 64]);
            assert_eq!(column.bin_sizes(), vec![31, 62, 124, 248, 496]);
            assert!(column.iter().all(|e| e.bin_count * e.bin_size == 31744));
        }
    }

    #[test]
    // Purpose
    // -------
    // Rebinning preserves the overall mean, so every scale reports the same
    // mean as the kept rows.
    //
    // Given
    // -----
    // - 100 rows, skip 10%, schedule 16 → 4 (kept = 80).
    //
    // Expect
    // ------
    // - Every entry's mean equals the plain mean of the last 80 rows.
    fn ave_means_are_scale_independent() {
        let data = make_pseudo_noise(100, 3);

        let (columns, _, report) = ave(data.view(), 10, false, &small_options()).unwrap();

        assert_eq!(report, Report::new(80, 100));
        let direct = get_stats(data.slice(ndarray::s![20.., ..])).unwrap();
        for (column, summary) in columns.iter().zip(direct.iter()) {
            for entry in column {
                assert_relative_eq!(entry.mean, summary.mean, epsilon = 1e-12);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Rows repeated in blocks of `k` are perfectly correlated within a block;
    // once bins cover whole blocks the SEM grows by √k and τ = k / 2.
    //
    // Given
    // -----
    // - 64 distinct values, each repeated 4 times (256 rows), no skip.
    // - Schedule 64 → 16, so every bin holds at least one whole block.
    //
    // Expect
    // ------
    // - (sem_64 / sem_unbinned)² == 4·255/252 exactly (up to rounding).
    // - τ at least half that ratio, since τ uses the largest SEM.
    fn ave_actime_on_block_repeated_data() {
        // Arrange
        let base = make_pseudo_noise(64, 1);
        let data = Array2::from_shape_fn((256, 1), |(i, _)| base[[i / 4, 0]]);
        let options = ScalingOptions::new(64, 16).unwrap();

        // Act
        let (columns, actimes, _) = ave(data.view(), 0, true, &options).unwrap();

        // Assert
        let unbinned = get_stats(data.view()).unwrap()[0].sem;
        let expected = autocorrelation_time(&columns[0], unbinned);
        assert_eq!(actimes.len(), 1);
        assert_relative_eq!(actimes[0], expected, epsilon = 1e-12);
        // At 64 bins each bin is one block, so s_unbinned² = s_64² · 4·63/255.
        let sem_64 = columns[0].entries[0].sem;
        let ratio_sq = (sem_64 / unbinned).powi(2);
        assert_relative_eq!(ratio_sq, 4.0 * 255.0 / 252.0, max_relative = 1e-10);
        assert!(actimes[0] >= ratio_sq / 2.0 - 1e-12);
    }

    #[test]
    fn autocorrelation_time_is_nan_for_empty_series() {
        assert!(autocorrelation_time(&BinnedStats::default(), 1.0).is_nan());
    }

    #[test]
    fn ave_rejects_too_few_rows_for_max_bins() {
        let data = make_pseudo_noise(20, 1);

        let err = ave(data.view(), 50, false, &small_options()).unwrap_err();

        assert_eq!(err, BinningError::InsufficientRows { requested: 16, available: 10 });
    }
}
