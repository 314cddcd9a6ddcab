//! Shared macros for constructing core math primitives.

/// Simplifies constructing [`Point`](crate::point::Point)s from anything
/// convertible into [`BigInt`](num_bigint::BigInt).
///
/// ```
/// use math::prelude::*;
///
/// let p = point!(2, 7);
/// assert_eq!(p, Point::new(2, 7));
/// ```
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::point::Point::new($x, $y)
    };
}

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// ```
/// use math::prelude::*;
///
/// let pts = points![(1, 4), (2, 7), (3, 12)];
/// assert_eq!(pts.len(), 3);
/// assert_eq!(pts[1], point!(2, 7));
/// ```
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::point::Point::new($x, $y)),*]
    };
}
