//! # u-probability
//!
//! Probability and descriptive-statistics helpers over `f64` sequences.
//!
//! Every operation is a pure function: inputs are borrowed slices and
//! transforms return freshly allocated vectors.
//!
//! ## Modules
//!
//! - [`elementwise`] — Sequence/sequence and sequence/scalar arithmetic
//! - [`distributions`] — PMF and CDF construction, CDF bin lookup, indicators
//! - [`conditional`] — Filtering a sequence by a parallel condition sequence
//! - [`stats`] — Mean, population variance, covariance, correlation
//! - [`labeled`] — The same statistics over `(label, value)` pairs
//! - [`error`] — [`StatsError`] for undefined results
//!
//! ## Design Philosophy
//!
//! - **Fallbacks are behavior**: zero divisors and non-positive PMF sums
//!   produce documented values, not errors
//! - **Undefined is an error**: empty means and zero-variance correlations
//!   return [`StatsError`] instead of NaN
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod conditional;
pub mod distributions;
pub mod elementwise;
pub mod error;
pub mod labeled;
pub mod stats;

pub use error::{Result, StatsError};
