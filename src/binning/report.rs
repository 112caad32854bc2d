//! binning::report — row-count summary attached to every driver result.
use std::fmt;

/// Report — how many rows survived tailoring.
///
/// Displays as `"{kept}/{total} rows"`; purely informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Rows used by the estimator after tailoring.
    pub kept: usize,
    /// Rows in the input dataset.
    pub total: usize,
}

impl Report {
    pub fn new(kept: usize, total: usize) -> Self {
        Report { kept, total }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} rows", self.kept, self.total)
    }
}
