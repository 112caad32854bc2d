//! functionals::elementwise — closures as functionals.
use crate::functionals::Functional;
use ndarray::{Array1, ArrayView1};

/// Elementwise — wrap a scalar closure of fixed arity as a [`Functional`].
///
/// The vectorized path calls the closure once per element with the `i`-th
/// value of every argument array gathered into a small buffer. Use a
/// hand-written implementation when a closed-form array expression exists.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_das::functionals::{Elementwise, Functional};
/// let product = Elementwise::new("product", 2, |x: &[f64]| x[0] * x[1]);
/// assert_eq!(product.apply(&[3.0, 4.0]).unwrap(), 12.0);
///
/// let a = array![1.0, 2.0];
/// let b = array![5.0, 6.0];
/// assert_eq!(product.apply_vectorized(&[a.view(), b.view()]).unwrap(), array![5.0, 12.0]);
/// ```
pub struct Elementwise<F> {
    name: &'static str,
    arity: usize,
    func: F,
}

impl<F> Elementwise<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new(name: &'static str, arity: usize, func: F) -> Self {
        Elementwise { name, arity, func }
    }
}

impl<F> std::fmt::Debug for Elementwise<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Elementwise").field("name", &self.name).field("arity", &self.arity).finish()
    }
}

impl<F> Functional for Elementwise<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn eval(&self, means: &[f64]) -> f64 {
        (self.func)(means)
    }

    fn eval_vectorized(&self, means: &[ArrayView1<'_, f64>]) -> Array1<f64> {
        let len = means.first().map_or(0, |m| m.len());
        let mut buf = vec![0.0; self.arity];
        Array1::from_shape_fn(len, |i| {
            for (slot, column) in buf.iter_mut().zip(means) {
                *slot = column[i];
            }
            (self.func)(&buf)
        })
    }

    fn name(&self) -> &str {
        self.name
    }
}
