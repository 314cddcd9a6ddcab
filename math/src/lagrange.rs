//! Lagrange interpolation at `x = 0` over unbounded integers.
//!
//! For the selected points `(x_i, y_i)` the constant term is
//! `f(0) = Σ_i y_i · Π_{j≠i}(-x_j) / Π_{j≠i}(x_i - x_j)`.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::InterpolationError;
use crate::traits::PointSource;

/// How the basis-term quotients are turned into an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DivisionPolicy {
    /// Sum the basis terms as an exact fraction and require the total to be
    /// an integer. Any `k` points on an integer polynomial agree.
    #[default]
    Exact,
    /// Divide every basis term on its own, truncating toward zero, then sum
    /// the quotients. Only sound when each term divides evenly (for example
    /// consecutive abscissae `1..=k`).
    Truncating,
}

/// Interpolate f(0) from the first `k` of `points` with [`DivisionPolicy::Exact`].
///
/// `points` should already be sorted by ascending x (see
/// [`sort_by_abscissa`](crate::point::sort_by_abscissa)) so the choice of the
/// `k` points is reproducible.
///
/// ```
/// use math::prelude::*;
/// use num_bigint::BigInt;
///
/// let secret = interpolate_at_zero(&points![(1, 4), (2, 7), (3, 12)], 3).unwrap();
/// assert_eq!(secret, BigInt::from(3));
/// ```
pub fn interpolate_at_zero<S: PointSource>(
    points: &[S],
    k: usize,
) -> Result<BigInt, InterpolationError> {
    interpolate_at_zero_with(points, k, DivisionPolicy::Exact)
}

/// Interpolate f(0) from the first `k` of `points` under `policy`.
pub fn interpolate_at_zero_with<S: PointSource>(
    points: &[S],
    k: usize,
    policy: DivisionPolicy,
) -> Result<BigInt, InterpolationError> {
    let selected = select_points(points, k)?;
    ensure_distinct_abscissae(selected)?;

    match policy {
        DivisionPolicy::Exact => exact_sum(selected),
        DivisionPolicy::Truncating => Ok((0..selected.len())
            .map(|i| {
                let (numerator, denominator) = basis_term(selected, i);
                numerator / denominator
            })
            .sum()),
    }
}

/// Evaluate `Σ coefficients[i] · x^i` with Horner's rule.
pub fn evaluate_polynomial(coefficients: &[BigInt], x: &BigInt) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
}

/// Take the first `k` points, rejecting thresholds outside `1..=len`.
fn select_points<S>(points: &[S], k: usize) -> Result<&[S], InterpolationError> {
    if k == 0 || k > points.len() {
        return Err(InterpolationError::InsufficientPoints {
            required: k,
            available: points.len(),
        });
    }
    Ok(&points[..k])
}

fn ensure_distinct_abscissae<S: PointSource>(
    selected: &[S],
) -> Result<(), InterpolationError> {
    let mut seen: HashMap<&BigInt, usize> = HashMap::with_capacity(selected.len());
    for (idx, point) in selected.iter().enumerate() {
        if let Some(&first) = seen.get(point.x()) {
            return Err(InterpolationError::coincident(point.x(), first, idx));
        }
        seen.insert(point.x(), idx);
    }
    Ok(())
}

/// Numerator and denominator of `y_i · L_i(0)`.
fn basis_term<S: PointSource>(selected: &[S], i: usize) -> (BigInt, BigInt) {
    let xi = selected[i].x();
    let mut numerator = selected[i].y().clone();
    let mut denominator = BigInt::one();

    for (j, point) in selected.iter().enumerate() {
        if i == j {
            continue;
        }
        numerator *= -point.x();
        denominator *= xi - point.x();
    }

    (numerator, denominator)
}

fn exact_sum<S: PointSource>(selected: &[S]) -> Result<BigInt, InterpolationError> {
    let mut numerator = BigInt::zero();
    let mut denominator = BigInt::one();

    for i in 0..selected.len() {
        let (term_num, term_den) = basis_term(selected, i);
        numerator = numerator * &term_den + term_num * &denominator;
        denominator *= term_den;

        let gcd = numerator.gcd(&denominator);
        if !gcd.is_one() {
            numerator /= &gcd;
            denominator /= &gcd;
        }
    }

    if denominator.is_negative() {
        numerator = -numerator;
        denominator = -denominator;
    }

    if !denominator.is_one() {
        return Err(InterpolationError::NonIntegerInterpolation {
            numerator,
            denominator,
        });
    }

    Ok(numerator)
}
