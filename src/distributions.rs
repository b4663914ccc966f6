//! Discrete distributions built from raw weight sequences.
//!
//! A weight sequence `x` is turned into a probability mass function by
//! dividing every element by the total, and into a cumulative distribution
//! function by a running prefix sum of the PMF.
//!
//! | Function | Result |
//! |---|---|
//! | [`to_pmf`] | `x / Σx`, or `x` unchanged when `Σx ≤ 0` |
//! | [`to_cdf`] | prefix sum of [`to_pmf`] |
//! | [`cdf_bin`] | first index whose CDF value exceeds the observation |
//! | [`cdf_value`] | the **raw** weight at [`cdf_bin`] |
//! | [`flatten`] | `1.0`/`0.0` indicator of a predicate |
//!
//! # Design Notes
//!
//! [`cdf_value`] locates the bin on the CDF but reads the value from the
//! original, un-normalized input. This mixes two scales on purpose.

use crate::elementwise::{divide_scalar, sum};
use crate::error::{Result, StatsError};

/// Normalizes `x` into a probability mass function.
///
/// When the total is not strictly positive (empty, all zeros, or a
/// negative net sum) the input is returned unnormalized instead.
///
/// # Examples
/// ```
/// use u_probability::distributions::to_pmf;
/// assert_eq!(to_pmf(&[1.0, 1.0, 2.0]), vec![0.25, 0.25, 0.5]);
/// assert_eq!(to_pmf(&[0.0, 0.0]), vec![0.0, 0.0]);
/// ```
pub fn to_pmf(x: &[f64]) -> Vec<f64> {
    let total = sum(x);
    if total > 0.0 {
        divide_scalar(x, total)
    } else {
        tracing::debug!(total, len = x.len(), "to_pmf: non-positive sum, not normalizing");
        x.to_vec()
    }
}

/// Cumulative distribution function of `x`: running prefix sum of
/// [`to_pmf`].
///
/// Non-decreasing for non-negative weights; the last element is `1.0` up
/// to rounding when the input has a positive sum.
///
/// # Examples
/// ```
/// use u_probability::distributions::to_cdf;
/// assert_eq!(to_cdf(&[1.0, 1.0, 2.0]), vec![0.25, 0.5, 1.0]);
/// ```
pub fn to_cdf(x: &[f64]) -> Vec<f64> {
    let mut y = to_pmf(x);
    for k in 1..y.len() {
        y[k] += y[k - 1];
    }
    y
}

/// Bin selected by `observation` on the CDF of `x`.
///
/// Returns the smallest `k` with `observation < cdf[k]`, or the last index
/// if no such `k` exists. The result is always in `0..x.len()`.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `x` is empty.
///
/// # Examples
/// ```
/// use u_probability::distributions::cdf_bin;
/// let w = [1.0, 1.0, 2.0]; // CDF = [0.25, 0.5, 1.0]
/// assert_eq!(cdf_bin(&w, 0.0), Ok(0));
/// assert_eq!(cdf_bin(&w, 0.25), Ok(1));
/// assert_eq!(cdf_bin(&w, 0.7), Ok(2));
/// assert_eq!(cdf_bin(&w, 5.0), Ok(2));
/// ```
pub fn cdf_bin(x: &[f64], observation: f64) -> Result<usize> {
    if x.is_empty() {
        return Err(StatsError::EmptyInput { op: "cdf_bin" });
    }
    let cdf = to_cdf(x);
    Ok(cdf
        .iter()
        .position(|&c| observation < c)
        .unwrap_or(x.len() - 1))
}

/// Raw weight `x[cdf_bin(x, observation)]`.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `x` is empty.
///
/// # Examples
/// ```
/// use u_probability::distributions::cdf_value;
/// let w = [10.0, 30.0, 60.0]; // CDF = [0.1, 0.4, 1.0]
/// assert_eq!(cdf_value(&w, 0.05), Ok(10.0));
/// assert_eq!(cdf_value(&w, 0.5), Ok(60.0));
/// ```
pub fn cdf_value(x: &[f64], observation: f64) -> Result<f64> {
    let bin = cdf_bin(x, observation).map_err(|_| StatsError::EmptyInput { op: "cdf_value" })?;
    Ok(x[bin])
}

/// Indicator sequence: `1.0` where `pred(x[i])` holds, `0.0` elsewhere.
///
/// # Examples
/// ```
/// use u_probability::distributions::flatten;
/// assert_eq!(flatten(&[0.2, 0.8, 0.5], |v| v >= 0.5), vec![0.0, 1.0, 1.0]);
/// ```
pub fn flatten<P>(x: &[f64], pred: P) -> Vec<f64>
where
    P: Fn(f64) -> bool,
{
    x.iter()
        .map(|&v| if pred(v) { 1.0 } else { 0.0 })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- to_pmf ---

    #[test]
    fn test_pmf_normalizes() {
        let p = to_pmf(&[2.0, 6.0]);
        assert_eq!(p, vec![0.25, 0.75]);
    }

    #[test]
    fn test_pmf_zero_sum_unchanged() {
        assert_eq!(to_pmf(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pmf_negative_sum_unchanged() {
        assert_eq!(to_pmf(&[1.0, -3.0]), vec![1.0, -3.0]);
    }

    #[test]
    fn test_pmf_empty() {
        assert!(to_pmf(&[]).is_empty());
    }

    // --- to_cdf ---

    #[test]
    fn test_cdf_prefix_sum() {
        let c = to_cdf(&[1.0, 2.0, 3.0, 4.0]);
        let expected = [0.1, 0.3, 0.6, 1.0];
        for (a, b) in c.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn test_cdf_does_not_mutate_input() {
        let x = vec![1.0, 1.0];
        let _ = to_cdf(&x);
        assert_eq!(x, vec![1.0, 1.0]);
    }

    #[test]
    fn test_cdf_zero_sum_accumulates_raw() {
        assert_eq!(to_cdf(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_cdf_single() {
        assert_eq!(to_cdf(&[5.0]), vec![1.0]);
    }

    // --- cdf_bin ---

    #[test]
    fn test_cdf_bin_boundaries() {
        let w = [1.0, 1.0, 2.0];
        assert_eq!(cdf_bin(&w, -1.0), Ok(0));
        assert_eq!(cdf_bin(&w, 0.24), Ok(0));
        assert_eq!(cdf_bin(&w, 0.25), Ok(1));
        assert_eq!(cdf_bin(&w, 0.49), Ok(1));
        assert_eq!(cdf_bin(&w, 0.5), Ok(2));
        assert_eq!(cdf_bin(&w, 1.0), Ok(2));
        assert_eq!(cdf_bin(&w, 100.0), Ok(2));
    }

    #[test]
    fn test_cdf_bin_skips_empty_bins() {
        // CDF = [0.0, 0.5, 0.5, 1.0]
        let w = [0.0, 1.0, 0.0, 1.0];
        assert_eq!(cdf_bin(&w, 0.0), Ok(1));
        assert_eq!(cdf_bin(&w, 0.5), Ok(3));
    }

    #[test]
    fn test_cdf_bin_all_zero_clamps_to_last() {
        assert_eq!(cdf_bin(&[0.0, 0.0, 0.0], 0.3), Ok(2));
    }

    #[test]
    fn test_cdf_bin_empty() {
        assert_eq!(
            cdf_bin(&[], 0.5),
            Err(StatsError::EmptyInput { op: "cdf_bin" })
        );
    }

    // --- cdf_value ---

    #[test]
    fn test_cdf_value_reads_raw_weight() {
        let w = [10.0, 30.0, 60.0];
        assert_eq!(cdf_value(&w, 0.0), Ok(10.0));
        assert_eq!(cdf_value(&w, 0.2), Ok(30.0));
        assert_eq!(cdf_value(&w, 0.99), Ok(60.0));
    }

    #[test]
    fn test_cdf_value_empty() {
        assert_eq!(
            cdf_value(&[], 0.5),
            Err(StatsError::EmptyInput { op: "cdf_value" })
        );
    }

    // --- flatten ---

    #[test]
    fn test_flatten_indicator() {
        let f = flatten(&[-1.0, 0.0, 1.0, 2.0], |v| v > 0.0);
        assert_eq!(f, vec![0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&[], |_| true).is_empty());
    }
}
