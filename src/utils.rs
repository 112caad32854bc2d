//! utils — conversions between Python inputs and the Rust core.
//!
//! Only compiled with the `python-bindings` feature. Each helper turns a
//! loosely typed Python argument into a validated Rust value and maps every
//! failure to a Python exception.
#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Array2 → PyArray2
    PyArrayMethods, // .readonly()
    PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
use crate::{
    binning::{
        options::{DEFAULT_MAX_BINS, DEFAULT_MIN_BINS, ScalingOptions},
        validation::validate_skip_percent,
    },
    functionals::FunctionalKind,
};

/// Accept a 2-D `float64` ndarray, anything with `.to_numpy()` (pandas
/// DataFrame), or a nested sequence of floats.
///
/// Errors
/// ------
/// - `TypeError` when the object is none of the accepted forms.
/// - `ValueError` when a nested sequence is ragged.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    let columns = rows.first().map_or(0, |r| r.len());
    if let Some(bad) = rows.iter().position(|r| r.len() != columns) {
        return Err(PyValueError::new_err(format!(
            "ragged input: row {} has {} values, expected {}",
            bad + 1,
            rows[bad].len(),
            columns
        )));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let matrix = Array2::from_shape_vec((flat.len() / columns.max(1), columns), flat)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(matrix.into_pyarray(py).readonly())
}

/// Validate a Python skip percentage; negative values are rejected here,
/// values above 100 by [`validate_skip_percent`].
#[cfg(feature = "python-bindings")]
pub fn extract_skip_percent(skip: i64) -> PyResult<u32> {
    let percent = u32::try_from(skip)
        .map_err(|_| PyValueError::new_err(format!("skip percentage must lie in 0..=100; got {skip}")))?;
    validate_skip_percent(percent)?;
    Ok(percent)
}

/// Build [`ScalingOptions`] from optional Python arguments.
#[cfg(feature = "python-bindings")]
pub fn extract_scaling_options(
    max_bins: Option<usize>, min_bins: Option<usize>,
) -> PyResult<ScalingOptions> {
    let options = ScalingOptions::new(
        max_bins.unwrap_or(DEFAULT_MAX_BINS),
        min_bins.unwrap_or(DEFAULT_MIN_BINS),
    )?;
    Ok(options)
}

/// Resolve a functional name; `None` selects the susceptibility.
#[cfg(feature = "python-bindings")]
pub fn extract_functional(name: Option<&str>) -> PyResult<FunctionalKind> {
    match name {
        Some(name) => Ok(name.parse::<FunctionalKind>()?),
        None => Ok(FunctionalKind::default()),
    }
}
