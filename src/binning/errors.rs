//! binning::errors — error taxonomy for tailoring, binning, and estimators.
//!
//! Purpose
//! -------
//! Provide the single error enum and result alias shared by the row tailor,
//! the binner, column statistics, the three drivers, and the functional
//! contract. Every failure is fatal to the call that raised it; no driver
//! returns a partial result.
//!
//! Key behaviors
//! -------------
//! - Define [`BinningResult`] and [`BinningError`] as the canonical result
//!   and error types for the binning core.
//! - Attach human-readable `Display` messages that embed the offending
//!   counts so that CLI output and logs are meaningful on their own.
//! - Implement `From<BinningError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Variants carry only small payloads (counts, a short name); values are
//!   cheap to clone and compare in tests.
//! - Parsing failures are not represented here; they live in
//!   `loader::errors::ParsingError` and stay a distinct category.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that each `Display` message embeds its payload.
//! - Error paths are exercised indirectly by the tailor, rebin, stats and
//!   driver tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type BinningResult<T> = Result<T, BinningError>;

/// BinningError — failure conditions of the binning core.
///
/// Variants
/// --------
/// - `InsufficientRows { requested, available }`
///   Fewer rows remain than required: either a target bin count exceeds the
///   rows left after the burn-in cut, or statistics were requested on fewer
///   than two rows.
/// - `InsufficientRowsForBinning { bins, rows }`
///   The requested bin count exceeds the number of rows.
/// - `LeftoverRows { bins, rows }`
///   The rows do not divide evenly into the requested bin count.
/// - `InvalidArity { expected, actual }`
///   A functional received the wrong number of mean-value arguments.
/// - `LengthMismatch { expected, actual }`
///   Vectorized functional arguments have unequal lengths.
/// - `InvalidSkipPercent { percent }`
///   A skip percentage outside `0..=100`.
/// - `InvalidBinCount { bins }`
///   A bin count of zero.
/// - `InvalidScaling { max_bins, min_bins, reason }`
///   Inconsistent bin-scaling configuration.
/// - `UnknownFunctional { name }`
///   A functional name that matches no built-in functional.
#[derive(Debug, Clone, PartialEq)]
pub enum BinningError {
    // ---- Row availability ----
    InsufficientRows { requested: usize, available: usize },
    InsufficientRowsForBinning { bins: usize, rows: usize },
    LeftoverRows { bins: usize, rows: usize },

    // ---- Functional contract ----
    InvalidArity { expected: usize, actual: usize },
    LengthMismatch { expected: usize, actual: usize },

    // ---- Configuration ----
    InvalidSkipPercent { percent: u32 },
    InvalidBinCount { bins: usize },
    InvalidScaling { max_bins: usize, min_bins: usize, reason: &'static str },
    UnknownFunctional { name: String },
}

impl std::error::Error for BinningError {}

impl std::fmt::Display for BinningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Row availability ----
            BinningError::InsufficientRows { requested, available } => {
                write!(f, "insufficient rows left: requested {requested}, available {available}")
            }
            BinningError::InsufficientRowsForBinning { bins, rows } => {
                write!(f, "insufficient rows for binning: {bins} bins requested from {rows} rows")
            }
            BinningError::LeftoverRows { bins, rows } => {
                write!(f, "leftover rows in binning: {rows} rows do not split into {bins} bins")
            }
            // ---- Functional contract ----
            BinningError::InvalidArity { expected, actual } => {
                write!(f, "functional expects {expected} arguments, got {actual}")
            }
            BinningError::LengthMismatch { expected, actual } => {
                write!(f, "vectorized functional arguments differ in length: {expected} vs {actual}")
            }
            // ---- Configuration ----
            BinningError::InvalidSkipPercent { percent } => {
                write!(f, "skip percentage must lie in 0..=100; got {percent}")
            }
            BinningError::InvalidBinCount { bins } => {
                write!(f, "bin count must be positive; got {bins}")
            }
            BinningError::InvalidScaling { max_bins, min_bins, reason } => {
                write!(f, "invalid bin scaling (max_bins = {max_bins}, min_bins = {min_bins}): {reason}")
            }
            BinningError::UnknownFunctional { name } => {
                write!(f, "unknown functional '{name}'")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<BinningError> for PyErr {
    fn from(err: BinningError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for the row-availability variants.
    // - Payload embedding for arity and configuration variants.
    //
    // They intentionally DO NOT cover:
    // - The `From<BinningError> for PyErr` conversion (needs the Python C API).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InsufficientRows` reports both the requested and the
    // available row counts.
    //
    // Given
    // -----
    // - `InsufficientRows { requested: 8, available: 1 }`.
    //
    // Expect
    // ------
    // - The message starts with "insufficient rows left" and contains both
    //   counts.
    fn insufficient_rows_embeds_counts() {
        // Arrange
        let err = BinningError::InsufficientRows { requested: 8, available: 1 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.starts_with("insufficient rows left"), "Got: {msg}");
        assert!(msg.contains('8') && msg.contains('1'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure the two binning-shape variants produce distinct messages.
    //
    // Given
    // -----
    // - `InsufficientRowsForBinning { 10, 8 }` and `LeftoverRows { 5, 8 }`.
    //
    // Expect
    // ------
    // - Messages differ and mention the matching condition.
    fn binning_shape_variants_are_distinguishable() {
        let short = BinningError::InsufficientRowsForBinning { bins: 10, rows: 8 }.to_string();
        let leftover = BinningError::LeftoverRows { bins: 5, rows: 8 }.to_string();

        assert_ne!(short, leftover);
        assert!(short.starts_with("insufficient rows for binning"));
        assert!(leftover.starts_with("leftover rows in binning"));
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidArity` reports the expected and actual arity.
    //
    // Given
    // -----
    // - `InvalidArity { expected: 2, actual: 3 }`.
    //
    // Expect
    // ------
    // - The message contains "2" and "3".
    fn invalid_arity_embeds_expected_and_actual() {
        let msg = BinningError::InvalidArity { expected: 2, actual: 3 }.to_string();

        assert!(msg.contains('2') && msg.contains('3'), "Got: {msg}");
    }

    #[test]
    fn invalid_scaling_includes_reason() {
        let err = BinningError::InvalidScaling {
            max_bins: 100,
            min_bins: 64,
            reason: "max_bins must be a power of two",
        };

        let msg = err.to_string();

        assert!(msg.contains("100") && msg.contains("power of two"), "Got: {msg}");
    }
}
