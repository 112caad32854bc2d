//! binning::validation — shared input guards for the binning core.
//!
//! Purpose
//! -------
//! Centralize the cheap precondition checks used by the tailor, the binner,
//! and the drivers so each routine reports the same [`BinningError`] for the
//! same mistake.
//!
//! Key behaviors
//! -------------
//! - Reject skip percentages outside `0..=100`.
//! - Reject zero bin counts before any division by the bin count happens.
//! - Check that a bin count fits the available rows and divides them evenly.
//!
//! Conventions
//! -----------
//! - Guards perform no allocation and no logging; they only map violations
//!   to [`BinningError`] values.
use crate::binning::errors::{BinningError, BinningResult};

/// Upper bound (inclusive) of a skip percentage.
pub const MAX_SKIP_PERCENT: u32 = 100;

/// Ensure `percent` lies in `0..=100`.
///
/// Errors
/// ------
/// - `BinningError::InvalidSkipPercent { percent }` when `percent > 100`.
pub fn validate_skip_percent(percent: u32) -> BinningResult<()> {
    if percent > MAX_SKIP_PERCENT {
        return Err(BinningError::InvalidSkipPercent { percent });
    }
    Ok(())
}

/// Ensure `bins` is a usable bin count.
///
/// Errors
/// ------
/// - `BinningError::InvalidBinCount { bins }` when `bins == 0`.
pub fn validate_bin_count(bins: usize) -> BinningResult<()> {
    if bins == 0 {
        return Err(BinningError::InvalidBinCount { bins });
    }
    Ok(())
}

/// Ensure `rows` rows can be split into exactly `bins` equal groups.
///
/// Parameters
/// ----------
/// - `rows`: `usize`
///   Number of rows available.
/// - `bins`: `usize`
///   Requested number of groups.
///
/// Errors
/// ------
/// - `BinningError::InvalidBinCount` when `bins == 0`.
/// - `BinningError::InsufficientRowsForBinning` when `bins > rows`.
/// - `BinningError::LeftoverRows` when `rows % bins != 0`.
pub fn validate_binning_shape(rows: usize, bins: usize) -> BinningResult<()> {
    validate_bin_count(bins)?;
    if bins > rows {
        return Err(BinningError::InsufficientRowsForBinning { bins, rows });
    }
    if rows % bins != 0 {
        return Err(BinningError::LeftoverRows { bins, rows });
    }
    Ok(())
}
