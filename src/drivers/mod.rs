//! drivers — the three error estimators built on the binning primitives.
//!
//! Purpose
//! -------
//! Compose row tailoring, rebinning, and column statistics into the
//! user-facing estimators:
//!
//! - [`avs`]: simple average, every kept row an independent sample.
//! - [`ave`]: bin-scaling analysis, SEM tracked while the bin count halves
//!   from `max_bins` to `min_bins`, with an optional autocorrelation-time
//!   estimate.
//! - [`jck`]: delete-one jackknife for a nonlinear [`Functional`] of column
//!   means, evaluated on the same halving schedule.
//!
//! Invariants & assumptions
//! ------------------------
//! - Drivers are pure: the input view is never mutated and every call
//!   returns fresh results together with a [`Report`] of rows kept.
//! - Any failure aborts the whole call; no partial results are returned.
//! - The halving schedule comes from [`ScalingOptions`]; the default is
//!   1024 down to 64 bins.
//!
//! Downstream usage
//! ----------------
//! - The `das` binary and the Python bindings call these functions and pass
//!   the results to `crate::output` or convert them into Python objects.
//!
//! [`Functional`]: crate::functionals::Functional
//! [`Report`]: crate::binning::Report
//! [`ScalingOptions`]: crate::binning::ScalingOptions

pub mod ave;
pub mod avs;
pub mod jck;

pub use self::ave::{ave, autocorrelation_time};
pub use self::avs::avs;
pub use self::jck::jck;

pub mod prelude {
    pub use super::ave::{ave, autocorrelation_time};
    pub use super::avs::avs;
    pub use super::jck::jck;
}
