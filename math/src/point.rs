use std::fmt;

use num_bigint::BigInt;

use crate::traits::PointSource;

/// An immutable `(x, y)` coordinate over the integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.x, self.y)
    }
}

impl PointSource for Point {
    fn x(&self) -> &BigInt {
        &self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(BigInt, BigInt)> for Point {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Stable ascending sort by abscissa; the selection convention of
/// [`interpolate_at_zero`](crate::lagrange::interpolate_at_zero) relies on it.
pub fn sort_by_abscissa<S: PointSource>(points: &mut [S]) {
    points.sort_by(|a, b| a.x().cmp(b.x()));
}
