pub use crate::{point, points};
pub use crate::{
    digits::{decode, decode_signed, Radix},
    error::{DigitError, InterpolationError, MathError},
    lagrange::{interpolate_at_zero, interpolate_at_zero_with, DivisionPolicy},
    point::{sort_by_abscissa, Point},
    traits::PointSource,
};
