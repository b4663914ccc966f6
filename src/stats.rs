//! Descriptive statistics over plain `f64` sequences.
//!
//! All dispersion measures are **population** statistics: the divisor is
//! the element count `n`, never `n − 1`.
//!
//! # Undefined results
//!
//! The mean of an empty sequence and the correlation of a constant
//! sequence are undefined. Both are reported as [`StatsError`] rather than
//! as NaN, uniformly across [`mean`], [`variance`], [`std_dev`],
//! [`covariance`], [`correlation`] and their labeled counterparts in
//! [`crate::labeled`].
//!
//! # Algorithms
//!
//! - **Sum / Mean**: Neumaier compensated summation.
//! - **Variance**: two-pass, mean of squared deviations.
//! - **Covariance**: expectation of the product of centred sequences, built
//!   from [`crate::elementwise`] primitives so it inherits their
//!   length-mismatch rules.

use crate::elementwise::{multiply, subtract_scalar};
use crate::error::{Result, StatsError};

/// Arithmetic mean.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_probability::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput { op: "mean" });
    }
    Ok(kahan_sum(data) / data.len() as f64)
}

/// Expected value of an equally weighted sequence. Same as [`mean`].
pub fn expectation(data: &[f64]) -> Result<f64> {
    mean(data)
}

/// Mean over the elements that are not exactly `0.0`.
///
/// Zeros are excluded from both the sum and the count. Returns `0.0` when
/// no non-zero element exists, including for an empty slice.
///
/// # Examples
/// ```
/// use u_probability::stats::mean_non_zero;
/// assert_eq!(mean_non_zero(&[0.0, 0.0, 4.0, 6.0]), 5.0);
/// assert_eq!(mean_non_zero(&[0.0, 0.0]), 0.0);
/// ```
pub fn mean_non_zero(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for &x in data.iter().filter(|&&x| x != 0.0) {
        sum += x;
        count += 1;
    }
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Population variance: mean of squared deviations from the mean.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_probability::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn variance(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput { op: "variance" });
    }
    let m = kahan_sum(data) / data.len() as f64;
    let sum_sq: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(sum_sq / data.len() as f64)
}

/// Population standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
pub fn std_dev(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput { op: "std_dev" });
    }
    variance(data).map(f64::sqrt)
}

/// Population covariance `E[(x − E[x]) · (y − E[y])]`.
///
/// The product is taken with [`multiply`], so when `y` is shorter than `x`
/// the uncovered positions contribute `0.0` while still counting toward
/// the divisor `x.len()`.
///
/// # Errors
/// [`StatsError::EmptyInput`] if either sequence is empty.
///
/// # Examples
/// ```
/// use u_probability::stats::covariance;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// assert!((covariance(&x, &y).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.is_empty() || y.is_empty() {
        return Err(StatsError::EmptyInput { op: "covariance" });
    }
    let dx = subtract_scalar(x, expectation(x)?);
    let dy = subtract_scalar(y, expectation(y)?);
    expectation(&multiply(&dx, &dy))
}

/// Pearson correlation `Cov(x, y) / (σx · σy)`.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if either sequence is empty.
/// - [`StatsError::ZeroVariance`] if either sequence is constant.
///
/// # Examples
/// ```
/// use u_probability::stats::correlation;
/// let x = [1.0, 2.0, 3.0];
/// let y = [3.0, 2.0, 1.0];
/// assert!((correlation(&x, &y).unwrap() + 1.0).abs() < 1e-12);
/// assert!(correlation(&x, &[5.0, 5.0, 5.0]).is_err());
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    correlation_for("correlation", x, y)
}

/// Correlation of a sequence with itself.
///
/// Always `1.0` (within rounding) for a non-constant sequence.
///
/// # Errors
/// Same as [`correlation`].
pub fn autocorrelation(x: &[f64]) -> Result<f64> {
    correlation_for("autocorrelation", x, x)
}

fn correlation_for(op: &'static str, x: &[f64], y: &[f64]) -> Result<f64> {
    if x.is_empty() || y.is_empty() {
        return Err(StatsError::EmptyInput { op });
    }
    let denom = std_dev(x)? * std_dev(y)?;
    if denom == 0.0 {
        tracing::debug!(op, "zero standard deviation, correlation undefined");
        return Err(StatsError::ZeroVariance { op });
    }
    Ok(covariance(x, y)? / denom)
}

// ---------------------------------------------------------------------------
// Kahan compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    compensated_sum(data.iter().copied())
}

/// Neumaier summation over any iterator of values.
pub(crate) fn compensated_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
