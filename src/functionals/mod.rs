//! functionals — derived quantities evaluated on column means.
//!
//! Purpose
//! -------
//! Define the contract the jackknife driver uses to evaluate nonlinear
//! functions of column means, together with a small library of built-in
//! functionals.
//!
//! Key behaviors
//! -------------
//! - [`Functional`] exposes two evaluation paths: a scalar path on the
//!   full-sample means and a vectorized path on whole arrays of leave-one-out
//!   means, so the jackknife evaluates all `n` leave-one-out values in a
//!   single call.
//! - [`Functional::apply`] and [`Functional::apply_vectorized`] check the
//!   argument count (and, for arrays, equal lengths) before any arithmetic.
//! - Built-ins: [`Identity`], [`Susceptibility`], [`Ratio`], [`Binder`], and
//!   the name-based dispatcher [`FunctionalKind`].
//! - [`Elementwise`] adapts any scalar closure into a [`Functional`].
//!
//! Invariants & assumptions
//! ------------------------
//! - A functional has a fixed arity; argument `k` is the mean of the `k`-th
//!   selected column.
//! - The scalar and vectorized paths compute the same mathematical function:
//!   `eval_vectorized(x)[i] == eval(&[x_0[i], …, x_{k-1}[i]])`.
//! - Functionals are pure; they hold no state that changes between calls.
//!
//! Downstream usage
//! ----------------
//! - `crate::drivers::jck` takes `&dyn Functional` (or any `F: Functional`).
//! - The CLI and Python bindings select a built-in by name through
//!   [`FunctionalKind`]'s `FromStr` implementation.

pub mod builtin;
pub mod elementwise;

use crate::binning::errors::{BinningError, BinningResult};
use ndarray::{Array1, ArrayView1};

pub use self::builtin::{Binder, FunctionalKind, Identity, Ratio, Susceptibility};
pub use self::elementwise::Elementwise;

/// Functional — a fixed-arity function of column means.
///
/// Required:
/// - `arity() -> usize`: number of mean-value arguments.
/// - `eval(&[f64]) -> f64`: evaluate on plain scalars. Called only with
///   exactly `arity()` arguments.
/// - `eval_vectorized(&[ArrayView1<f64>]) -> Array1<f64>`: evaluate
///   elementwise on equally long arrays. Called only with exactly `arity()`
///   arrays of equal length.
///
/// Provided:
/// - `apply` / `apply_vectorized`: the checked entry points used by callers.
pub trait Functional {
    // Required methods
    fn arity(&self) -> usize;
    fn eval(&self, means: &[f64]) -> f64;
    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64>;

    // Provided methods

    /// Short, human-readable name used in logs.
    fn name(&self) -> &str {
        "functional"
    }

    /// Evaluate on scalar means after checking the arity.
    ///
    /// Errors
    /// ------
    /// - `BinningError::InvalidArity` when `means.len() != self.arity()`.
    fn apply(&self, means: &[f64]) -> BinningResult<f64> {
        check_arity(self.arity(), means.len())?;
        Ok(self.eval(means))
    }

    /// Evaluate elementwise on arrays of means after checking the arity and
    /// that all arrays share one length.
    ///
    /// Errors
    /// ------
    /// - `BinningError::InvalidArity` when `means.len() != self.arity()`.
    /// - `BinningError::LengthMismatch` when the arrays differ in length.
    fn apply_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> BinningResult<Array1<f64>> {
        check_arity(self.arity(), means.len())?;
        if let Some(first) = means.first() {
            let expected = first.len();
            if let Some(other) = means.iter().find(|m| m.len() != expected) {
                return Err(BinningError::LengthMismatch { expected, actual: other.len() });
            }
        }
        Ok(self.eval_vectorized(means))
    }
}

impl<F: Functional + ?Sized> Functional for &F {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn eval(&self, means: &[f64]) -> f64 {
        (**self).eval(means)
    }

    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64> {
        (**self).eval_vectorized(means)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<F: Functional + ?Sized> Functional for Box<F> {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn eval(&self, means: &[f64]) -> f64 {
        (**self).eval(means)
    }

    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64> {
        (**self).eval_vectorized(means)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

fn check_arity(expected: usize, actual: usize) -> BinningResult<()> {
    if expected != actual {
        return Err(BinningError::InvalidArity { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover the checked entry points of the trait: arity and
    // length validation happen before evaluation. Built-in formulas are
    // tested in `builtin`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The scalar path rejects a wrong argument count.
    //
    // Given
    // -----
    // - `Susceptibility` (arity 2) applied to one and three scalars.
    //
    // Expect
    // ------
    // - `InvalidArity { expected: 2, actual: 1 }` and `{ 2, 3 }`.
    fn apply_rejects_wrong_arity() {
        let f = Susceptibility;

        assert_eq!(
            f.apply(&[1.0]).unwrap_err(),
            BinningError::InvalidArity { expected: 2, actual: 1 }
        );
        assert_eq!(
            f.apply(&[1.0, 2.0, 3.0]).unwrap_err(),
            BinningError::InvalidArity { expected: 2, actual: 3 }
        );
    }

    #[test]
    // Purpose
    // -------
    // The vectorized path checks arity first, then lengths.
    //
    // Given
    // -----
    // - `Susceptibility` applied to one array, then to arrays of lengths
    //   3 and 2.
    //
    // Expect
    // ------
    // - `InvalidArity` for the single array; `LengthMismatch { 3, 2 }` for
    //   the ragged pair.
    fn apply_vectorized_rejects_wrong_arity_and_ragged_inputs() {
        let f = Susceptibility;
        let a = array![1.0, 2.0, 3.0];
        let b = array![1.0, 2.0];

        assert_eq!(
            f.apply_vectorized(&[a.view()]).unwrap_err(),
            BinningError::InvalidArity { expected: 2, actual: 1 }
        );
        assert_eq!(
            f.apply_vectorized(&[a.view(), b.view()]).unwrap_err(),
            BinningError::LengthMismatch { expected: 3, actual: 2 }
        );
    }

    #[test]
    fn references_and_boxes_forward_to_inner_functional() {
        let boxed: Box<dyn Functional> = Box::new(Susceptibility);
        let by_ref = &Susceptibility;

        assert_eq!(boxed.arity(), 2);
        assert_eq!(boxed.apply(&[5.0, 2.0]).unwrap(), 1.0);
        assert_eq!(by_ref.apply(&[5.0, 2.0]).unwrap(), 1.0);
        assert_eq!(boxed.name(), "susceptibility");
    }
}
