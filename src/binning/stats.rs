//! binning::stats — column means, standard errors, and their uncertainty.
//!
//! Purpose
//! -------
//! Summarize each column of an `N × C` dataset by its mean, the standard
//! error of the mean (SEM), and the standard error of that SEM, treating the
//! rows as `N` independent samples. Also defines the per-scale result types
//! produced by the bin-scaling and jackknife drivers.
//!
//! Key behaviors
//! -------------
//! - [`get_stats`] computes, per column,
//!   `mean = Σx / N`,
//!   `sem = s / √N` with the Bessel-corrected sample deviation
//!   `s² = Σ(x − mean)² / (N − 1)`, and
//!   `se_of_sem = sem / √(2(N − 1))`.
//! - [`Stats`] holds one [`ColumnSummary`] per column, in column order.
//! - [`BinnedStats`] holds one [`BinnedEntry`] per bin scale, largest bin
//!   count first.
//!
//! Invariants & assumptions
//! ------------------------
//! - `N ≥ 2`; smaller inputs fail with `BinningError::InsufficientRows`.
//! - `sem ≥ 0` and `se_of_sem ≥ 0` for finite inputs.
//! - The variance comes from `ndarray::ArrayBase::std_axis`, which updates
//!   deviations about a running mean (Welford) and stays accurate for
//!   columns sharing a large common offset.
//!
//! Testing notes
//! -------------
//! - Unit tests check hand-computed summaries, the `N < 2` error path, and
//!   stability under a large additive offset.
//! - `tests/integration_binning_pipeline.rs` cross-checks [`get_stats`]
//!   against `statrs` sample statistics.
use crate::binning::errors::{BinningError, BinningResult};
use ndarray::{ArrayView2, Axis};

/// ColumnSummary — mean, SEM, and SE(SEM) of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    /// Sample mean.
    pub mean: f64,
    /// Standard error of the mean.
    pub sem: f64,
    /// Standard error of `sem` under approximate normality.
    pub se_of_sem: f64,
}

/// Stats — one [`ColumnSummary`] per dataset column.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub columns: Vec<ColumnSummary>,
}

impl Stats {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnSummary> {
        self.columns.iter()
    }

    pub fn means(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.mean).collect()
    }

    pub fn sems(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.sem).collect()
    }
}

impl std::ops::Index<usize> for Stats {
    type Output = ColumnSummary;

    fn index(&self, column: usize) -> &ColumnSummary {
        &self.columns[column]
    }
}

impl<'a> IntoIterator for &'a Stats {
    type Item = &'a ColumnSummary;
    type IntoIter = std::slice::Iter<'a, ColumnSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// BinnedEntry — statistics of one column at one bin scale.
///
/// Fields
/// ------
/// - `bin_count`: number of bins at this scale.
/// - `bin_size`: rows per bin; `bin_count · bin_size` equals the tailored
///   row count.
/// - `mean`, `sem`, `se_of_sem`: summary of the `bin_count` bin values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinnedEntry {
    pub bin_count: usize,
    pub bin_size: usize,
    pub mean: f64,
    pub sem: f64,
    pub se_of_sem: f64,
}

impl BinnedEntry {
    pub fn new(bin_count: usize, bin_size: usize, summary: ColumnSummary) -> Self {
        BinnedEntry {
            bin_count,
            bin_size,
            mean: summary.mean,
            sem: summary.sem,
            se_of_sem: summary.se_of_sem,
        }
    }

    pub fn summary(&self) -> ColumnSummary {
        ColumnSummary { mean: self.mean, sem: self.sem, se_of_sem: self.se_of_sem }
    }
}

/// BinnedStats — how one column's statistics evolve with bin size.
///
/// Invariants
/// ----------
/// - Entries are ordered from the largest `bin_count` to the smallest and
///   `bin_count` halves between consecutive entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BinnedStats {
    pub entries: Vec<BinnedEntry>,
}

impl BinnedStats {
    pub fn with_capacity(scales: usize) -> Self {
        BinnedStats { entries: Vec::with_capacity(scales) }
    }

    pub fn push(&mut self, entry: BinnedEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BinnedEntry> {
        self.entries.iter()
    }

    pub fn bin_counts(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.bin_count).collect()
    }

    pub fn bin_sizes(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.bin_size).collect()
    }

    pub fn means(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.mean).collect()
    }

    pub fn sems(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.sem).collect()
    }

    /// Largest SEM over all scales; `None` when there are no entries.
    pub fn max_sem(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.sem).reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a BinnedStats {
    type Item = &'a BinnedEntry;
    type IntoIter = std::slice::Iter<'a, BinnedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compute mean, SEM, and SE(SEM) for every column of `data`.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   `N × C` dataset; each row is one sample.
///
/// Returns
/// -------
/// `BinningResult<Stats>`
///   One [`ColumnSummary`] per column.
///
/// Errors
/// ------
/// - `BinningError::InsufficientRows { requested: 2, available: N }` when
///   `N < 2`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_das::binning::stats::get_stats;
/// let stats = get_stats(array![[1.0], [2.0], [3.0], [4.0]].view()).unwrap();
/// assert_eq!(stats[0].mean, 2.5);
/// assert!((stats[0].sem - 0.6454972243679028).abs() < 1e-12);
/// ```
pub fn get_stats(data: ArrayView2<'_, f64>) -> BinningResult<Stats> {
    let n = data.nrows();
    if n < 2 {
        return Err(BinningError::InsufficientRows { requested: 2, available: n });
    }
    let n_f = n as f64;
    let sqrt_n = n_f.sqrt();
    let sqrt_dof = (2.0 * (n_f - 1.0)).sqrt();

    let means = data.sum_axis(Axis(0)) / n_f;
    let stds = data.std_axis(Axis(0), 1.0);

    let columns = means
        .iter()
        .zip(stds.iter())
        .map(|(&mean, &std)| {
            let sem = std / sqrt_n;
            ColumnSummary { mean, sem, se_of_sem: sem / sqrt_dof }
        })
        .collect();
    Ok(Stats { columns })
}
