//! drivers::jck — delete-one jackknife on binned data.
//!
//! Purpose
//! -------
//! Estimate a nonlinear function of column means, its first-order bias
//! correction, and its standard error, at every bin count of the halving
//! schedule.
//!
//! Key behaviors
//! -------------
//! At bin count `n` with binned rows `y_1, …, y_n`:
//!
//! ```text
//! Σ    = Σ_i y_i                         (column sums)
//! θ    = f(Σ / n)                        (full-sample value)
//! μ_i  = (Σ − y_i) / (n − 1)             (leave-one-out means)
//! p_i  = n·θ − (n − 1)·f(μ_i)            (pseudovalues)
//! ```
//!
//! and the entry for this scale is the mean, SEM, and SE(SEM) of the `p_i`.
//! The functional is evaluated once on the scalar means and once on the
//! whole vector of leave-one-out means.
//!
//! Invariants & assumptions
//! ------------------------
//! - The functional's arity must equal the number of dataset columns; this
//!   is checked before any tailoring or arithmetic.
//! - For a linear functional the pseudovalues equal the bin values, so the
//!   result coincides with the bin-scaling driver on that column.
use crate::{
    binning::{
        errors::{BinningError, BinningResult},
        options::ScalingOptions,
        rebin::rebin,
        report::Report,
        stats::{BinnedEntry, BinnedStats, ColumnSummary, get_stats},
        tailor::drop_rows,
    },
    functionals::Functional,
};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Jackknife estimate of `functional` over the halving schedule.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   `R × k` dataset; column `j` feeds argument `j` of the functional.
/// - `skip_percent`: `u32`
///   Percentage (0–100) of leading rows to discard.
/// - `functional`: `&F`
///   Function of `k` column means.
/// - `options`: `&ScalingOptions`
///   Halving schedule; [`ScalingOptions::default`] gives 1024 → 64.
///
/// Returns
/// -------
/// `BinningResult<(BinnedStats, Report)>`
///   One entry per scale (bin count, bin size, jackknife mean, SEM,
///   SE(SEM)) and the kept/total row counts.
///
/// Errors
/// ------
/// - `BinningError::InvalidArity` when `functional.arity() != k`.
/// - `BinningError::InvalidSkipPercent` / `InsufficientRows` from tailoring.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::Array2;
/// # use rust_das::binning::ScalingOptions;
/// # use rust_das::drivers::jck;
/// # use rust_das::functionals::Susceptibility;
/// let data = Array2::from_shape_fn((64, 2), |(i, j)| ((i * 37 + j * 11) % 17) as f64);
/// let opts = ScalingOptions::new(16, 4).unwrap();
/// let (stats, report) = jck(data.view(), 0, &Susceptibility, &opts).unwrap();
/// assert_eq!(stats.bin_counts(), vec![16, 8, 4]);
/// assert_eq!(report.to_string(), "64/64 rows");
/// ```
pub fn jck<F: Functional + ?Sized>(
    data: ArrayView2<'_, f64>, skip_percent: u32, functional: &F, options: &ScalingOptions,
) -> BinningResult<(BinnedStats, Report)> {
    if functional.arity() != data.ncols() {
        return Err(BinningError::InvalidArity {
            expected: functional.arity(),
            actual: data.ncols(),
        });
    }

    let total = data.nrows();
    let kept = drop_rows(data, skip_percent, Some(options.max_bins()))?;
    let rows = kept.nrows();
    let report = Report::new(rows, total);
    tracing::debug!(%report, functional = functional.name(), "jackknife");

    let mut result = BinnedStats::with_capacity(options.scale_count());
    for bins in options.bin_counts() {
        let binned = rebin(kept, bins)?;
        let summary = jackknife_scale(binned.view(), functional)?;
        tracing::debug!(bins, mean = summary.mean, sem = summary.sem, "scale done");
        result.push(BinnedEntry::new(bins, rows / bins, summary));
    }
    Ok((result, report))
}

/// Pseudovalue statistics for one set of `n ≥ 2` binned rows.
fn jackknife_scale<F: Functional + ?Sized>(
    binned: ArrayView2<'_, f64>, functional: &F,
) -> BinningResult<ColumnSummary> {
    let n = binned.nrows() as f64;
    let sums = binned.sum_axis(Axis(0));

    let full_means: Vec<f64> = sums.iter().map(|&s| s / n).collect();
    let theta = functional.apply(&full_means)?;

    let loo_means: Vec<Array1<f64>> = binned
        .columns()
        .into_iter()
        .zip(sums.iter())
        .map(|(column, &sum)| column.mapv(|y| (sum - y) / (n - 1.0)))
        .collect();
    let loo_views: Vec<ArrayView1<'_, f64>> = loo_means.iter().map(|m| m.view()).collect();
    let loo_values = functional.apply_vectorized(&loo_views)?;

    let pseudo = loo_values.mapv(|f| n * theta - (n - 1.0) * f);
    let stats = get_stats(pseudo.view().insert_axis(Axis(1)))?;
    Ok(stats[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::ave::ave;
    use crate::functionals::{Elementwise, Identity, Susceptibility};
    use approx::assert_relative_eq;
    use ndarray::{Array2, s};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The no-op bias correction for linear functionals.
    // - Agreement of the vectorized pseudovalues with a per-bin scalar loop.
    // - Schedule, bin sizes, and report for a jackknife-sized input.
    // - Arity validation before any work is done.
    // -------------------------------------------------------------------------

    fn make_series(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(i, j)| {
            let t = i as f64;
            (0.37 * t + j as f64).sin() + 0.25 * (0.011 * t * (j + 1) as f64).cos() + j as f64
        })
    }

    #[test]
    // Purpose
    // -------
    // For the identity functional the pseudovalues are the bin values, so
    // the jackknife reproduces the bin-scaling result.
    //
    // Given
    // -----
    // - A 300 × 1 series, skip 5%, schedule 32 → 4.
    //
    // Expect
    // ------
    // - Entry-by-entry agreement of mean, SEM, and SE(SEM) with `ave`.
    fn identity_jackknife_matches_bin_scaling() {
        // Arrange
        let data = make_series(300, 1);
        let options = ScalingOptions::new(32, 4).unwrap();

        // Act
        let (jack, jack_report) = jck(data.view(), 5, &Identity, &options).unwrap();
        let (scaled, _, ave_report) = ave(data.view(), 5, false, &options).unwrap();

        // Assert
        assert_eq!(jack_report, ave_report);
        assert_eq!(jack.bin_counts(), scaled[0].bin_counts());
        for (j, a) in jack.iter().zip(scaled[0].iter()) {
            assert_relative_eq!(j.mean, a.mean, max_relative = 1e-12);
            assert_relative_eq!(j.sem, a.sem, max_relative = 1e-9);
            assert_relative_eq!(j.se_of_sem, a.se_of_sem, max_relative = 1e-9);
        }
    }

    #[test]
    // Purpose
    // -------
    // The vectorized leave-one-out evaluation must agree with an explicit
    // loop that removes one bin at a time and evaluates the scalar path.
    //
    // Given
    // -----
    // - A 128 × 2 series, no skip, schedule 16 → 8, susceptibility.
    //
    // Expect
    // ------
    // - Matching jackknife mean and SEM at both scales.
    fn susceptibility_matches_explicit_leave_one_out_loop() {
        let data = make_series(128, 2);
        let options = ScalingOptions::new(16, 8).unwrap();

        let (jack, _) = jck(data.view(), 0, &Susceptibility, &options).unwrap();

        for entry in &jack {
            let binned = rebin(data.view(), entry.bin_count).unwrap();
            let n = entry.bin_count;
            let full = binned.mean_axis(Axis(0)).unwrap();
            let theta = Susceptibility.apply(&full.to_vec()).unwrap();
            let pseudo = Array1::from_shape_fn(n, |i| {
                let mut kept_rows = Vec::with_capacity(n - 1);
                for k in (0..n).filter(|&k| k != i) {
                    kept_rows.push(binned.row(k));
                }
                let loo = ndarray::stack(Axis(0), &kept_rows).unwrap().mean_axis(Axis(0)).unwrap();
                n as f64 * theta - (n - 1) as f64 * Susceptibility.apply(&loo.to_vec()).unwrap()
            });
            let expected = get_stats(pseudo.view().insert_axis(Axis(1))).unwrap()[0];

            assert_relative_eq!(entry.mean, expected.mean, max_relative = 1e-10);
            assert_relative_eq!(entry.sem, expected.sem, max_relative = 1e-8);
        }
    }

    #[test]
    // Purpose
    // -------
    // Check schedule, bin sizes, and report on a 5000-row input.
    //
    // Given
    // -----
    // - 5000 × 2 rows, skip 10%, default options.
    //
    // Expect
    // ------
    // - Report "4096/5000 rows", bin counts 1024 → 64, sizes 4 → 64.
    fn jck_default_schedule() {
        let data = make_series(5000, 2);

        let (jack, report) = jck(data.view(), 10, &Susceptibility, &ScalingOptions::default())
            .unwrap();

        assert_eq!(report.to_string(), "4096/5000 rows");
        assert_eq!(jack.bin_counts(), vec![1024, 512, 256, 128, 64]);
        assert_eq!(jack.bin_sizes(), vec![4, 8, 16, 32, 64]);
    }

    #[test]
    // Purpose
    // -------
    // An affine functional is linear, so its jackknife mean is the affine
    // map of the plain mean of the kept rows.
    //
    // Given
    // -----
    // - `f(x) = 3x − 2` via `Elementwise`, 200 rows, skip 20%.
    //
    // Expect
    // ------
    // - Every scale's mean equals `3·mean − 2`.
    fn affine_functional_has_no_bias_correction() {
        let data = make_series(200, 1);
        let affine = Elementwise::new("affine", 1, |x: &[f64]| 3.0 * x[0] - 2.0);
        let options = ScalingOptions::new(32, 8).unwrap();

        let (jack, report) = jck(data.view(), 20, &affine, &options).unwrap();

        let tail = data.slice(s![report.total - report.kept.., ..]);
        let mean = tail.mean_axis(Axis(0)).unwrap()[0];
        for entry in &jack {
            assert_relative_eq!(entry.mean, 3.0 * mean - 2.0, max_relative = 1e-10);
        }
    }

    #[test]
    fn jck_rejects_arity_mismatch_before_tailoring() {
        let data = make_series(10, 3);

        // 10 rows cannot hold 1024 bins; the arity error must win.
        let err = jck(data.view(), 0, &Susceptibility, &ScalingOptions::default()).unwrap_err();

        assert_eq!(err, BinningError::InvalidArity { expected: 2, actual: 3 });
    }
}
