//! Elementwise arithmetic over `f64` sequences.
//!
//! Every function returns a new vector with the length of the first
//! operand. When the second sequence is shorter, the positions it does not
//! cover follow a per-operation rule:
//!
//! | Operation | Missing position | Zero divisor |
//! |---|---|---|
//! | [`add`], [`subtract`] | copies `a[i]` | n/a |
//! | [`multiply`] | writes `0.0` | n/a |
//! | [`divide`] | copies `a[i]` | writes `0.0` at that position |
//! | [`divide_scalar`] | n/a | whole result is zeros |
//!
//! The rules are deliberately not uniform; callers rely on each one.
//! Surplus elements of a longer second operand are ignored.

use crate::stats::kahan_sum;

/// Sum of all elements, using compensated summation.
///
/// Returns `0.0` for an empty slice.
///
/// # Examples
/// ```
/// use u_probability::elementwise::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    kahan_sum(data)
}

/// Applies `op` where `b` has an element and `missing` where it does not.
fn zip_with(
    a: &[f64],
    b: &[f64],
    op: impl Fn(f64, f64) -> f64,
    missing: impl Fn(f64) -> f64,
) -> Vec<f64> {
    a.iter()
        .enumerate()
        .map(|(i, &x)| match b.get(i) {
            Some(&y) => op(x, y),
            None => missing(x),
        })
        .collect()
}

/// `a[i] + b[i]`; positions beyond `b` keep `a[i]`.
///
/// # Examples
/// ```
/// use u_probability::elementwise::add;
/// assert_eq!(add(&[1.0, 2.0, 3.0], &[4.0, 5.0]), vec![5.0, 7.0, 3.0]);
/// ```
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    zip_with(a, b, |x, y| x + y, |x| x)
}

/// `a[i] - b[i]`; positions beyond `b` keep `a[i]`.
pub fn subtract(a: &[f64], b: &[f64]) -> Vec<f64> {
    zip_with(a, b, |x, y| x - y, |x| x)
}

/// `a[i] * b[i]`; positions beyond `b` become `0.0`.
///
/// # Examples
/// ```
/// use u_probability::elementwise::multiply;
/// assert_eq!(multiply(&[1.0, 2.0, 3.0], &[4.0, 5.0]), vec![4.0, 10.0, 0.0]);
/// ```
pub fn multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
    zip_with(a, b, |x, y| x * y, |_| 0.0)
}

/// `a[i] / b[i]`; a zero divisor yields `0.0`, positions beyond `b` keep `a[i]`.
///
/// # Examples
/// ```
/// use u_probability::elementwise::divide;
/// assert_eq!(divide(&[10.0, 20.0], &[2.0, 0.0]), vec![5.0, 0.0]);
/// assert_eq!(divide(&[10.0, 20.0], &[2.0]), vec![5.0, 20.0]);
/// ```
pub fn divide(a: &[f64], b: &[f64]) -> Vec<f64> {
    zip_with(a, b, |x, y| if y != 0.0 { x / y } else { 0.0 }, |x| x)
}

/// `a[i] + scalar`.
pub fn add_scalar(a: &[f64], scalar: f64) -> Vec<f64> {
    a.iter().map(|&x| x + scalar).collect()
}

/// `a[i] - scalar`.
pub fn subtract_scalar(a: &[f64], scalar: f64) -> Vec<f64> {
    a.iter().map(|&x| x - scalar).collect()
}

/// `a[i] * scalar`.
pub fn multiply_scalar(a: &[f64], scalar: f64) -> Vec<f64> {
    a.iter().map(|&x| x * scalar).collect()
}

/// `a[i] / scalar`, or all zeros when `scalar == 0.0`.
///
/// The zero check happens once for the whole call; no element is divided
/// when it fires.
///
/// # Examples
/// ```
/// use u_probability::elementwise::divide_scalar;
/// assert_eq!(divide_scalar(&[2.0, 4.0], 2.0), vec![1.0, 2.0]);
/// assert_eq!(divide_scalar(&[1.0, 2.0, 3.0], 0.0), vec![0.0, 0.0, 0.0]);
/// ```
pub fn divide_scalar(a: &[f64], scalar: f64) -> Vec<f64> {
    if scalar == 0.0 {
        tracing::trace!(len = a.len(), "divide_scalar: zero divisor, returning zeros");
        return vec![0.0; a.len()];
    }
    a.iter().map(|&x| x / scalar).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
