use num_bigint::BigInt;

/// Abstract source of an interpolation point.
pub trait PointSource {
    /// The abscissa (share index) of this point.
    fn x(&self) -> &BigInt;

    /// The ordinate (decoded share value) of this point.
    fn y(&self) -> &BigInt;
}

impl PointSource for (BigInt, BigInt) {
    fn x(&self) -> &BigInt {
        &self.0
    }

    fn y(&self) -> &BigInt {
        &self.1
    }
}

impl<T: PointSource + ?Sized> PointSource for &T {
    fn x(&self) -> &BigInt {
        (**self).x()
    }

    fn y(&self) -> &BigInt {
        (**self).y()
    }
}
