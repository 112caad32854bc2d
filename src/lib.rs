//! rust_das — binned statistics and jackknife errors for correlated samples.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the estimators to Python via the `_rust_das` extension module. The crate
//! analyzes time-ordered simulation output (e.g. Monte Carlo measurements),
//! where consecutive rows are autocorrelated, and reports column means with
//! error bars that account for that correlation.
//!
//! Key behaviors
//! -------------
//! - `binning`: row tailoring, rebinning, column statistics, and the shared
//!   result/error types.
//! - `drivers`: the three estimators `avs` (simple average), `ave`
//!   (bin-scaling analysis with optional autocorrelation time), and `jck`
//!   (delete-one jackknife of a functional).
//! - `functionals`: the [`functionals::Functional`] trait and built-ins.
//! - `loader`: plain or gzip-compressed text files to `Array2<f64>`.
//! - `output`: terminal rendering used by the `das` binary.
//! - With `python-bindings`: the `_rust_das` module and its `binning` and
//!   `loader` submodules.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; the Python glue below
//!   only converts inputs, forwards calls, and maps errors.
//! - Datasets are borrowed read-only; every call returns fresh results.
//!
//! Conventions
//! -----------
//! - Field indices are 0-based in the Rust and Python APIs; only the CLI
//!   uses 1-based fields.
//! - Errors are `BinningError` / `ParsingError` internally and become
//!   `ValueError` / `OSError` at the PyO3 boundary.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to the code; `tests/` holds end-to-end runs on
//!   synthetic autocorrelated data and on fixture files.

pub mod binning;
pub mod drivers;
pub mod functionals;
pub mod loader;
pub mod output;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    binning::stats::BinnedStats,
    utils::{extract_f64_matrix, extract_functional, extract_scaling_options, extract_skip_percent},
};

/// One bin scale as seen from Python: `(bins, bin_size, mean, sem, se_of_sem)`.
#[cfg(feature = "python-bindings")]
type PyScale = (usize, usize, f64, f64, f64);

#[cfg(feature = "python-bindings")]
fn scales_to_py(binned: &BinnedStats) -> Vec<PyScale> {
    binned.iter().map(|e| (e.bin_count, e.bin_size, e.mean, e.sem, e.se_of_sem)).collect()
}

/// avs(data, skip=0) — simple average of every column.
///
/// Returns
/// -------
/// `(list[(mean, sem, se_of_sem)], report)`
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "avs", signature = (data, skip = 0))]
fn py_avs<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, skip: i64,
) -> PyResult<(Vec<(f64, f64, f64)>, String)> {
    let arr = extract_f64_matrix(py, data)?;
    let skip = extract_skip_percent(skip)?;

    let (stats, report) = drivers::avs(arr.as_array(), skip)?;
    let columns = stats.iter().map(|c| (c.mean, c.sem, c.se_of_sem)).collect();
    Ok((columns, report.to_string()))
}

/// ave(data, skip=0, actime=False, max_bins=1024, min_bins=64) — bin-scaling
/// analysis.
///
/// Returns
/// -------
/// `(list[list[(bins, bin_size, mean, sem, se_of_sem)]], list[actime], report)`
///   One inner list per column; the actime list is empty unless requested.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "ave", signature = (data, skip = 0, actime = false, max_bins = None, min_bins = None))]
fn py_ave<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, skip: i64, actime: bool, max_bins: Option<usize>,
    min_bins: Option<usize>,
) -> PyResult<(Vec<Vec<PyScale>>, Vec<f64>, String)> {
    let arr = extract_f64_matrix(py, data)?;
    let skip = extract_skip_percent(skip)?;
    let options = extract_scaling_options(max_bins, min_bins)?;

    let (columns, actimes, report) = drivers::ave(arr.as_array(), skip, actime, &options)?;
    Ok((columns.iter().map(scales_to_py).collect(), actimes, report.to_string()))
}

/// jck(data, skip=0, functional="susceptibility", max_bins=1024, min_bins=64)
/// — jackknife estimate of a built-in functional of the column means.
///
/// Returns
/// -------
/// `(list[(bins, bin_size, mean, sem, se_of_sem)], report)`
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "jck",
    signature = (data, skip = 0, functional = None, max_bins = None, min_bins = None)
)]
fn py_jck<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, skip: i64, functional: Option<&str>,
    max_bins: Option<usize>, min_bins: Option<usize>,
) -> PyResult<(Vec<PyScale>, String)> {
    let arr = extract_f64_matrix(py, data)?;
    let skip = extract_skip_percent(skip)?;
    let options = extract_scaling_options(max_bins, min_bins)?;
    let functional = extract_functional(functional)?;

    let (binned, report) = drivers::jck(arr.as_array(), skip, &functional, &options)?;
    Ok((scales_to_py(&binned), report.to_string()))
}

/// parse_ds(path, fields=None, colnum_test=False) — load a dataset file into
/// a 2-D float64 ndarray.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "parse_ds", signature = (path, fields = None, colnum_test = false))]
fn py_parse_ds<'py>(
    py: Python<'py>, path: std::path::PathBuf, fields: Option<Vec<usize>>, colnum_test: bool,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let data = loader::parse_ds(&path, fields.as_deref(), colnum_test)?;
    Ok(data.into_pyarray(py))
}

/// _rust_das — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `binning` (estimators) and `loader` (file parsing)
///   submodules and attach them to `_rust_das`.
/// - Register both in `sys.modules` so dotted imports work from Python.
///
/// Notes
/// -----
/// - Invoked by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_das<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let binning_mod = PyModule::new(_py, "binning")?;
    let loader_mod = PyModule::new(_py, "loader")?;
    register_binning(_py, m, &binning_mod)?;
    register_loader(_py, m, &loader_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_das.binning", binning_mod)?;
    _py.import("sys")?.getattr("modules")?.set_item("rust_das.loader", loader_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn register_binning<'py>(
    _py: Python, rust_das: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_avs, m)?)?;
    m.add_function(wrap_pyfunction!(py_ave, m)?)?;
    m.add_function(wrap_pyfunction!(py_jck, m)?)?;
    rust_das.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn register_loader<'py>(
    _py: Python, rust_das: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_parse_ds, m)?)?;
    rust_das.add_submodule(m)?;
    Ok(())
}
