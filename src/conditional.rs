//! Conditional filtering against a parallel condition sequence.
//!
//! `given(x, condition, pred)` keeps `x[i]` wherever `pred(condition[i])`
//! holds and writes `0.0` everywhere else. Filtered positions are zeroed,
//! not removed, so the output always has the length of `x`.
//!
//! The condition sequence must cover every index of `x`; any surplus
//! condition elements are ignored.

use crate::distributions::to_pmf;
use crate::error::{Result, StatsError};

fn check_cover(x: &[f64], condition: &[f64]) -> Result<()> {
    if condition.len() < x.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            actual: condition.len(),
        });
    }
    Ok(())
}

/// Keeps `x[i]` where `pred(condition[i])` holds, `0.0` elsewhere.
///
/// # Errors
/// [`StatsError::LengthMismatch`] if `condition` is shorter than `x`.
///
/// # Examples
/// ```
/// use u_probability::conditional::given;
/// let x = [1.0, 2.0, 3.0];
/// let cond = [10.0, 20.0, 30.0];
/// assert_eq!(given(&x, &cond, |c| c > 15.0), Ok(vec![0.0, 2.0, 3.0]));
/// ```
pub fn given<P>(x: &[f64], condition: &[f64], pred: P) -> Result<Vec<f64>>
where
    P: Fn(f64) -> bool,
{
    check_cover(x, condition)?;
    Ok(x.iter()
        .zip(condition)
        .map(|(&v, &c)| if pred(c) { v } else { 0.0 })
        .collect())
}

/// Like [`given`], also returning the retained condition values.
///
/// The second vector holds `condition[i]` at retained positions and `0.0`
/// elsewhere.
///
/// # Errors
/// [`StatsError::LengthMismatch`] if `condition` is shorter than `x`.
///
/// # Examples
/// ```
/// use u_probability::conditional::given_with_condition;
/// let (y, c) = given_with_condition(&[1.0, 2.0], &[-1.0, 1.0], |c| c > 0.0).unwrap();
/// assert_eq!(y, vec![0.0, 2.0]);
/// assert_eq!(c, vec![0.0, 1.0]);
/// ```
pub fn given_with_condition<P>(
    x: &[f64],
    condition: &[f64],
    pred: P,
) -> Result<(Vec<f64>, Vec<f64>)>
where
    P: Fn(f64) -> bool,
{
    check_cover(x, condition)?;
    let mut y = vec![0.0; x.len()];
    let mut kept = vec![0.0; x.len()];
    for (i, (&v, &c)) in x.iter().zip(condition).enumerate() {
        if pred(c) {
            y[i] = v;
            kept[i] = c;
        }
    }
    Ok((y, kept))
}

/// [`given`] followed by [`to_pmf`].
///
/// # Errors
/// [`StatsError::LengthMismatch`] if `condition` is shorter than `x`.
///
/// # Examples
/// ```
/// use u_probability::conditional::given_pmf;
/// let p = given_pmf(&[1.0, 1.0, 2.0], &[0.0, 1.0, 1.0], |c| c > 0.5).unwrap();
/// assert_eq!(p, vec![0.0, 1.0 / 3.0, 2.0 / 3.0]);
/// ```
pub fn given_pmf<P>(x: &[f64], condition: &[f64], pred: P) -> Result<Vec<f64>>
where
    P: Fn(f64) -> bool,
{
    given(x, condition, pred).map(|y| to_pmf(&y))
}

/// [`given_with_condition`] with the subject normalized by [`to_pmf`].
///
/// Only the first vector is normalized; the retained condition values are
/// returned as-is.
///
/// # Errors
/// [`StatsError::LengthMismatch`] if `condition` is shorter than `x`.
pub fn given_pmf_with_condition<P>(
    x: &[f64],
    condition: &[f64],
    pred: P,
) -> Result<(Vec<f64>, Vec<f64>)>
where
    P: Fn(f64) -> bool,
{
    let (y, kept) = given_with_condition(x, condition, pred)?;
    Ok((to_pmf(&y), kept))
}
