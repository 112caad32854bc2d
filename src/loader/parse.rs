//! loader::parse — whitespace-separated numeric tables to `Array2<f64>`.
//!
//! Purpose
//! -------
//! Read the plain-text datasets written by simulation codes: one sample per
//! line, fields separated by whitespace, `#` starting a comment. Files whose
//! name ends in `.gz` are decompressed on the fly, including files made of
//! several concatenated gzip members (appended runs).
//!
//! Key behaviors
//! -------------
//! - Comment text and blank lines are ignored; leading/trailing whitespace
//!   is irrelevant.
//! - Integrity mode (`colnum_test = true`, or no field selection): every row
//!   must have as many fields as the first one, all fields are parsed, and
//!   the selection is applied afterwards.
//! - Selective mode (`colnum_test = false` with a field selection): only the
//!   requested fields are read; other fields may be missing or malformed.
//!
//! Invariants & assumptions
//! ------------------------
//! - The returned matrix is rectangular with at least one row and one
//!   column; column order follows the requested field order.
//! - Field indices are 0-based; duplicates are allowed and copied.
use crate::loader::errors::{ParsingError, ParsingResult};
use flate2::read::MultiGzDecoder;
use ndarray::{Array2, Axis};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

const COMMENT: char = '#';

/// Parse a dataset file into an `R × C` matrix.
///
/// Parameters
/// ----------
/// - `path`: `impl AsRef<Path>`
///   Text file, optionally gzip-compressed (`.gz` suffix).
/// - `fields`: `Option<&[usize]>`
///   0-based field indices to keep, in output order; `None` keeps all.
/// - `colnum_test`: `bool`
///   Require every row to have the same field count (see module docs).
///
/// Errors
/// ------
/// - `ParsingError::FileNotFound` when `path` is not an existing file.
/// - `ParsingError::Io` on read or decompression failures.
/// - Any shape or content error from [`parse_reader`].
pub fn parse_ds(
    path: impl AsRef<Path>, fields: Option<&[usize]>, colnum_test: bool,
) -> ParsingResult<Array2<f64>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ParsingError::FileNotFound { path: path.display().to_string() });
    }

    let file = File::open(path)?;
    let data = if path.extension().is_some_and(|ext| ext == "gz") {
        parse_reader(BufReader::new(MultiGzDecoder::new(file)), fields, colnum_test)?
    } else {
        parse_reader(BufReader::new(file), fields, colnum_test)?
    };

    tracing::info!(path = %path.display(), rows = data.nrows(), columns = data.ncols(),
        "loaded dataset");
    Ok(data)
}

/// Parse a dataset from any buffered reader.
///
/// Same rules and errors as [`parse_ds`], minus the file handling.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_das::loader::parse_reader;
/// let text = "# t  e  m\n1 -0.5 2\n\n2 -0.25 3  # tail\n";
/// let data = parse_reader(text.as_bytes(), Some(&[2, 1]), false).unwrap();
/// assert_eq!(data, array![[2.0, -0.5], [3.0, -0.25]]);
/// ```
pub fn parse_reader<R: BufRead>(
    reader: R, fields: Option<&[usize]>, colnum_test: bool,
) -> ParsingResult<Array2<f64>> {
    match fields {
        Some(selected) if !colnum_test => parse_selected(reader, selected),
        _ => {
            let full = parse_rectangular(reader)?;
            match fields {
                Some(selected) => select_columns(full, selected),
                None => Ok(full),
            }
        }
    }
}

/// Integrity mode: all fields of all rows, constant field count.
fn parse_rectangular<R: BufRead>(reader: R) -> ParsingResult<Array2<f64>> {
    let mut values = Vec::new();
    let mut columns = None;
    let mut rows = 0;

    for line in reader.lines() {
        let line = line?;
        let tokens: Vec<&str> = data_tokens(&line).collect();
        if tokens.is_empty() {
            continue;
        }
        rows += 1;

        let expected = *columns.get_or_insert(tokens.len());
        if tokens.len() != expected {
            return Err(ParsingError::ColumnCountChanged { expected, found: tokens.len(), row: rows });
        }
        for (column, token) in tokens.iter().enumerate() {
            values.push(parse_field(token, rows, column)?);
        }
    }

    let columns = columns.unwrap_or(0);
    if rows == 0 || columns == 0 {
        return Err(ParsingError::EmptyDataset);
    }
    Array2::from_shape_vec((rows, columns), values)
        .map_err(|err| ParsingError::Io(err.to_string()))
}

/// Selective mode: only `selected` fields are read on each row.
fn parse_selected<R: BufRead>(reader: R, selected: &[usize]) -> ParsingResult<Array2<f64>> {
    if selected.is_empty() {
        return Err(ParsingError::EmptyDataset);
    }
    let mut values = Vec::new();
    let mut rows = 0;

    for line in reader.lines() {
        let line = line?;
        let tokens: Vec<&str> = data_tokens(&line).collect();
        if tokens.is_empty() {
            continue;
        }
        rows += 1;

        for &index in selected {
            let token = tokens.get(index).ok_or(ParsingError::InvalidColumnIndex {
                index,
                row: rows,
                columns: tokens.len(),
            })?;
            values.push(parse_field(token, rows, index)?);
        }
    }

    if rows == 0 {
        return Err(ParsingError::EmptyDataset);
    }
    Array2::from_shape_vec((rows, selected.len()), values)
        .map_err(|err| ParsingError::Io(err.to_string()))
}

fn select_columns(full: Array2<f64>, selected: &[usize]) -> ParsingResult<Array2<f64>> {
    if selected.is_empty() {
        return Err(ParsingError::EmptyDataset);
    }
    let size = full.ncols();
    if let Some(&index) = selected.iter().find(|&&index| index >= size) {
        return Err(ParsingError::ColumnOutOfBounds { index, size });
    }
    Ok(full.select(Axis(1), selected))
}

/// Whitespace-separated fields of `line` before any comment marker.
fn data_tokens(line: &str) -> impl Iterator<Item = &str> {
    let content = match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    };
    content.split_whitespace()
}

fn parse_field(token: &str, row: usize, index: usize) -> ParsingResult<f64> {
    token.parse::<f64>().map_err(|_| ParsingError::NonNumeric {
        value: token.to_string(),
        row,
        column: index + 1,
    })
}
