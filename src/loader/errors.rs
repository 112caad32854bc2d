//! loader::errors — classification of malformed dataset files.
//!
//! Purpose
//! -------
//! Describe every way a dataset file can fail to become a rectangular
//! `f64` matrix. These errors form a category of their own, separate from
//! `BinningError`: they are raised before any estimator runs.
//!
//! Conventions
//! -----------
//! - Row numbers count data rows only (comments and blank lines excluded)
//!   and start at 1.
//! - `column` in `NonNumeric` starts at 1; `index` in the column-selection
//!   variants is the 0-based field index as requested by the caller.
//! - I/O failures keep only the rendered message so the enum stays
//!   `Clone + PartialEq`.

#[cfg(feature = "python-bindings")]
use pyo3::{
    PyErr,
    exceptions::{PyOSError, PyValueError},
};

pub type ParsingResult<T> = Result<T, ParsingError>;

/// ParsingError — reasons a dataset file was rejected.
///
/// Variants
/// --------
/// - `FileNotFound { path }`
///   The path does not name an existing regular file.
/// - `ColumnCountChanged { expected, found, row }`
///   A data row has a different number of fields than the first one.
/// - `InvalidColumnIndex { index, row, columns }`
///   A requested field is missing on a particular row.
/// - `ColumnOutOfBounds { index, size }`
///   A requested field does not exist in a rectangular dataset of `size`
///   columns.
/// - `NonNumeric { value, row, column }`
///   A field does not parse as a floating-point number.
/// - `EmptyDataset`
///   No data rows (or no columns) were selected.
/// - `Io(message)`
///   Reading or decompressing the file failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsingError {
    // ---- Input ----
    FileNotFound { path: String },
    Io(String),
    EmptyDataset,

    // ---- Shape ----
    ColumnCountChanged { expected: usize, found: usize, row: usize },
    InvalidColumnIndex { index: usize, row: usize, columns: usize },
    ColumnOutOfBounds { index: usize, size: usize },

    // ---- Content ----
    NonNumeric { value: String, row: usize, column: usize },
}

impl std::error::Error for ParsingError {}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input ----
            ParsingError::FileNotFound { path } => {
                write!(f, "file does not exist: {path}")
            }
            ParsingError::Io(msg) => write!(f, "failed to read dataset: {msg}"),
            ParsingError::EmptyDataset => write!(f, "dataset contains no data"),
            // ---- Shape ----
            ParsingError::ColumnCountChanged { expected, found, row } => {
                write!(
                    f,
                    "the number of columns changed from {expected} to {found} at row {row}; \
                     select a subset of fields to avoid this error"
                )
            }
            ParsingError::InvalidColumnIndex { index, row, columns } => {
                write!(f, "invalid column index {index} at row {row} with {columns} columns")
            }
            ParsingError::ColumnOutOfBounds { index, size } => {
                write!(f, "index {index} is out of bounds for axis 1 with size {size}")
            }
            // ---- Content ----
            ParsingError::NonNumeric { value, row, column } => {
                write!(f, "could not convert string '{value}' to float64 at row {row}, column {column}.")
            }
        }
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError::Io(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<ParsingError> for PyErr {
    fn from(err: ParsingError) -> PyErr {
        match err {
            ParsingError::FileNotFound { .. } | ParsingError::Io(_) => {
                PyOSError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}
