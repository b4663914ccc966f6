//! Statistics over labeled `(label, value)` pairs.
//!
//! Labels are opaque: they are never compared, hashed or grouped. Only the
//! numeric member of each pair participates in the arithmetic, so these
//! functions agree with their [`crate::stats`] counterparts applied to the
//! extracted values.

use crate::error::{Result, StatsError};
use crate::stats::compensated_sum;

fn values<L>(pairs: &[(L, f64)]) -> impl Iterator<Item = f64> + '_ {
    pairs.iter().map(|(_, v)| *v)
}

/// Sum of the values. Returns `0.0` for an empty slice.
///
/// # Examples
/// ```
/// use u_probability::labeled::sum;
/// let pairs = [("a", 1.5), ("b", 2.5)];
/// assert_eq!(sum(&pairs), 4.0);
/// ```
pub fn sum<L>(pairs: &[(L, f64)]) -> f64 {
    compensated_sum(values(pairs))
}

/// Arithmetic mean of the values.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `pairs` is empty.
pub fn mean<L>(pairs: &[(L, f64)]) -> Result<f64> {
    if pairs.is_empty() {
        return Err(StatsError::EmptyInput { op: "labeled mean" });
    }
    Ok(sum(pairs) / pairs.len() as f64)
}

/// Population variance of the values (divisor = number of pairs).
///
/// # Errors
/// [`StatsError::EmptyInput`] if `pairs` is empty.
///
/// # Examples
/// ```
/// use u_probability::labeled::variance;
/// let pairs = [(1, 1.0), (2, 3.0)];
/// assert_eq!(variance(&pairs), Ok(1.0));
/// ```
pub fn variance<L>(pairs: &[(L, f64)]) -> Result<f64> {
    if pairs.is_empty() {
        return Err(StatsError::EmptyInput {
            op: "labeled variance",
        });
    }
    let m = sum(pairs) / pairs.len() as f64;
    let sum_sq: f64 = values(pairs).map(|v| (v - m) * (v - m)).sum();
    Ok(sum_sq / pairs.len() as f64)
}

/// Population standard deviation of the values.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `pairs` is empty.
pub fn std_dev<L>(pairs: &[(L, f64)]) -> Result<f64> {
    if pairs.is_empty() {
        return Err(StatsError::EmptyInput {
            op: "labeled std_dev",
        });
    }
    variance(pairs).map(f64::sqrt)
}

/// Largest value, floored at `0.0`.
///
/// The running maximum starts at `0.0` and only moves to a strictly
/// greater value, so an empty or all-negative slice yields `0.0` rather
/// than its true maximum. Callers depend on this floor.
///
/// # Examples
/// ```
/// use u_probability::labeled::max_value;
/// assert_eq!(max_value(&[("x", 3.0), ("y", 7.0)]), 7.0);
/// assert_eq!(max_value(&[("x", -3.0), ("y", -7.0)]), 0.0);
/// ```
pub fn max_value<L>(pairs: &[(L, f64)]) -> f64 {
    values(pairs).fold(0.0, |max, v| if v > max { v } else { max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;

    #[test]
    fn test_sum_and_mean() {
        let pairs = [("a", 1.0), ("b", 2.0), ("c", 6.0)];
        assert_eq!(sum(&pairs), 9.0);
        assert_eq!(mean(&pairs), Ok(3.0));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let pairs: [(u8, f64); 0] = [];
        assert_eq!(sum(&pairs), 0.0);
    }

    #[test]
    fn test_empty_is_error() {
        let pairs: Vec<(String, f64)> = Vec::new();
        assert!(mean(&pairs).is_err());
        assert!(variance(&pairs).is_err());
        assert!(std_dev(&pairs).is_err());
    }

    #[test]
    fn test_variance_population() {
        let pairs = [(0, 2.0), (1, 4.0), (2, 4.0), (3, 4.0), (4, 5.0), (5, 5.0), (6, 7.0), (7, 9.0)];
        assert!((variance(&pairs).unwrap() - 4.0).abs() < 1e-12);
        assert!((std_dev(&pairs).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_labels_do_not_group() {
        // Duplicate labels are counted independently.
        let pairs = [("k", 1.0), ("k", 3.0)];
        assert_eq!(mean(&pairs), Ok(2.0));
    }

    #[test]
    fn test_max_value_positive() {
        assert_eq!(max_value(&[(1, 0.5), (2, 2.5), (3, 1.0)]), 2.5);
    }

    #[test]
    fn test_max_value_all_negative_floors_at_zero() {
        assert_eq!(max_value(&[(1, -0.5), (2, -2.5)]), 0.0);
    }

    #[test]
    fn test_max_value_empty() {
        let pairs: [(char, f64); 0] = [];
        assert_eq!(max_value(&pairs), 0.0);
    }

    #[test]
    fn test_agrees_with_plain_stats() {
        let raw = [1.0, 4.0, 9.0, 16.0];
        let pairs: Vec<(usize, f64)> = raw.iter().copied().enumerate().collect();
        assert_eq!(mean(&pairs), stats::mean(&raw));
        assert_eq!(variance(&pairs), stats::variance(&raw));
    }
}
