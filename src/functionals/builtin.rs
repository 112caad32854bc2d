//! functionals::builtin — ready-made functionals and name-based lookup.
//!
//! Each built-in is a zero-sized type implementing [`Functional`] for both
//! evaluation paths. [`FunctionalKind`] maps a user-facing name to one of
//! them so the CLI and the Python bindings can select a functional from a
//! string.
use crate::{
    binning::errors::BinningError,
    functionals::Functional,
};
use ndarray::{Array1, ArrayView1, Zip};
use std::str::FromStr;

/// Identity — `f(x) = x`, arity 1.
///
/// Linear, so the jackknife bias correction is a no-op: the jackknife mean
/// equals the plain column mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Functional for Identity {
    fn arity(&self) -> usize {
        1
    }

    fn eval(&self, means: &[f64]) -> f64 {
        means[0]
    }

    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64> {
        means[0].to_owned()
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// Susceptibility — `f(x1, x2) = x1 − x2²`, arity 2.
///
/// With `x1 = ⟨m²⟩` and `x2 = ⟨m⟩` this is the fluctuation
/// `⟨m²⟩ − ⟨m⟩²` (up to the usual volume/temperature prefactor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Susceptibility;

impl Functional for Susceptibility {
    fn arity(&self) -> usize {
        2
    }

    fn eval(&self, means: &[f64]) -> f64 {
        means[0] - means[1] * means[1]
    }

    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64> {
        Zip::from(&means[0]).and(&means[1]).map_collect(|&x1, &x2| x1 - x2 * x2)
    }

    fn name(&self) -> &str {
        "susceptibility"
    }
}

/// Ratio — `f(x1, x2) = x1 / x2`, arity 2.
///
/// Follows IEEE semantics: a zero denominator yields `±inf` or `NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ratio;

impl Functional for Ratio {
    fn arity(&self) -> usize {
        2
    }

    fn eval(&self, means: &[f64]) -> f64 {
        means[0] / means[1]
    }

    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64> {
        &means[0] / &means[1]
    }

    fn name(&self) -> &str {
        "ratio"
    }
}

/// Binder — fourth-order cumulant `f(x1, x2) = 1 − x1 / (3 x2²)`, arity 2.
///
/// Inputs are `(⟨m⁴⟩, ⟨m²⟩)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binder;

impl Binder {
    #[inline]
    fn cumulant(m4: f64, m2: f64) -> f64 {
        1.0 - m4 / (3.0 * m2 * m2)
    }
}

impl Functional for Binder {
    fn arity(&self) -> usize {
        2
    }

    fn eval(&self, means: &[f64]) -> f64 {
        Binder::cumulant(means[0], means[1])
    }

    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64> {
        Zip::from(&means[0]).and(&means[1]).map_collect(|&m4, &m2| Binder::cumulant(m4, m2))
    }

    fn name(&self) -> &str {
        "binder"
    }
}

/// FunctionalKind — built-in functional selected by name.
///
/// Parsing is case-insensitive and accepts `"susceptibility"` (alias
/// `"chi"`), `"identity"`, `"ratio"`, and `"binder"`. Unknown names fail
/// with `BinningError::UnknownFunctional`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FunctionalKind {
    #[default]
    Susceptibility,
    Identity,
    Ratio,
    Binder,
}

impl FunctionalKind {
    pub const ALL: [FunctionalKind; 4] = [
        FunctionalKind::Susceptibility,
        FunctionalKind::Identity,
        FunctionalKind::Ratio,
        FunctionalKind::Binder,
    ];

    fn as_functional(&self) -> &'static dyn Functional {
        match self {
            FunctionalKind::Susceptibility => &Susceptibility,
            FunctionalKind::Identity => &Identity,
            FunctionalKind::Ratio => &Ratio,
            FunctionalKind::Binder => &Binder,
        }
    }
}

impl FromStr for FunctionalKind {
    type Err = BinningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "susceptibility" | "chi" => Ok(FunctionalKind::Susceptibility),
            "identity" => Ok(FunctionalKind::Identity),
            "ratio" => Ok(FunctionalKind::Ratio),
            "binder" => Ok(FunctionalKind::Binder),
            _ => Err(BinningError::UnknownFunctional { name: s.to_string() }),
        }
    }
}

impl std::fmt::Display for FunctionalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_functional().name())
    }
}

impl Functional for FunctionalKind {
    fn arity(&self) -> usize {
        self.as_functional().arity()
    }

    fn eval(&self, means: &[f64]) -> f64 {
        self.as_functional().eval(means)
    }

    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64> {
        self.as_functional().eval_vectorized(means)
    }

    fn name(&self) -> &str {
        self.as_functional().name()
    }
}
