//! binning::options — bin-scaling configuration shared by `ave` and `jck`.
//!
//! Purpose
//! -------
//! Replace process-wide bin limits with an explicit configuration value that
//! the bin-scaling and jackknife drivers receive as an argument.
//!
//! Key behaviors
//! -------------
//! - [`ScalingOptions`] stores the largest and smallest bin counts of the
//!   halving schedule, defaulting to `1024` and `64`.
//! - [`ScalingOptions::new`] validates the pair so that every count in the
//!   schedule divides the tailored row count exactly.
//! - [`ScalingOptions::bin_counts`] yields the schedule
//!   `max_bins, max_bins/2, …, min_bins`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `max_bins` and `min_bins` are powers of two.
//! - `2 ≤ min_bins ≤ max_bins`; two bins is the least that still gives a
//!   defined sample variance.
//! - Tailoring to a multiple of `max_bins` therefore makes the row count a
//!   multiple of every count in the schedule.
use crate::binning::errors::{BinningError, BinningResult};

/// Default largest bin count of the halving schedule.
pub const DEFAULT_MAX_BINS: usize = 1024;
/// Default smallest bin count of the halving schedule.
pub const DEFAULT_MIN_BINS: usize = 64;

/// ScalingOptions — bounds of the bin-count halving schedule.
///
/// Fields
/// ------
/// - `max_bins`: `usize`
///   First (largest) bin count; the row tailor keeps a multiple of it.
/// - `min_bins`: `usize`
///   Last (smallest) bin count visited.
///
/// Notes
/// -----
/// - Fields are private so that every value in circulation has passed
///   [`ScalingOptions::new`]; use the accessors to read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingOptions {
    max_bins: usize,
    min_bins: usize,
}

impl ScalingOptions {
    /// Construct validated scaling bounds.
    ///
    /// Parameters
    /// ----------
    /// - `max_bins`: `usize`
    ///   Largest bin count; must be a power of two.
    /// - `min_bins`: `usize`
    ///   Smallest bin count; must be a power of two, at least 2, and not
    ///   larger than `max_bins`.
    ///
    /// Errors
    /// ------
    /// - `BinningError::InvalidScaling { .. }` naming the violated rule.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_das::binning::options::ScalingOptions;
    /// let opts = ScalingOptions::new(16, 4).unwrap();
    /// assert_eq!(opts.bin_counts().collect::<Vec<_>>(), vec![16, 8, 4]);
    /// ```
    pub fn new(max_bins: usize, min_bins: usize) -> BinningResult<Self> {
        let invalid = |reason| BinningError::InvalidScaling { max_bins, min_bins, reason };
        if !max_bins.is_power_of_two() {
            return Err(invalid("max_bins must be a power of two"));
        }
        if !min_bins.is_power_of_two() {
            return Err(invalid("min_bins must be a power of two"));
        }
        if min_bins < 2 {
            return Err(invalid("min_bins must be at least 2"));
        }
        if min_bins > max_bins {
            return Err(invalid("min_bins must not exceed max_bins"));
        }
        Ok(ScalingOptions { max_bins, min_bins })
    }

    pub fn max_bins(&self) -> usize {
        self.max_bins
    }

    pub fn min_bins(&self) -> usize {
        self.min_bins
    }

    /// Bin counts visited by the halving schedule, largest first.
    pub fn bin_counts(&self) -> impl Iterator<Item = usize> + use<> {
        let min_bins = self.min_bins;
        std::iter::successors(Some(self.max_bins), |&bins| Some(bins / 2))
            .take_while(move |&bins| bins >= min_bins)
    }

    /// Number of scales in the schedule.
    pub fn scale_count(&self) -> usize {
        (self.max_bins.trailing_zeros() - self.min_bins.trailing_zeros()) as usize + 1
    }
}

impl Default for ScalingOptions {
    /// `max_bins = 1024`, `min_bins = 64`: five scales.
    fn default() -> Self {
        ScalingOptions { max_bins: DEFAULT_MAX_BINS, min_bins: DEFAULT_MIN_BINS }
    }
}
