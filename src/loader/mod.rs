//! loader — dataset files to rectangular `f64` matrices.
//!
//! Purpose
//! -------
//! Turn simulation output on disk into the `Array2<f64>` the estimators in
//! `crate::drivers` consume, classifying malformed input as a
//! [`ParsingError`] before any statistics run.
//!
//! Key behaviors
//! -------------
//! - [`parse_ds`] reads plain or gzip-compressed text files.
//! - [`parse_reader`] applies the same rules to any `BufRead`.
//! - Field selection is 0-based here; the CLI converts its 1-based
//!   `--fields` before calling in.

pub mod errors;
pub mod parse;

pub use self::errors::{ParsingError, ParsingResult};
pub use self::parse::{parse_ds, parse_reader};
