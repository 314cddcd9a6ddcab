use num_bigint::BigInt;
use thiserror::Error;

pub mod digits {
    use thiserror::Error;

    /// Failures raised while turning a digit string into an integer.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("radix {0} is outside the supported range 2..=36")]
        InvalidRadix(u32),
        #[error("digit string must not be empty")]
        EmptyDigits,
        #[error("invalid character {character:?} in value {digits:?}")]
        InvalidDigitCharacter { character: char, digits: String },
        #[error("digit {digit} is out of range for base {radix} in value {digits:?}")]
        DigitOutOfRange {
            digit: u32,
            radix: u32,
            digits: String,
        },
    }
}

pub mod interpolation {
    use num_bigint::BigInt;
    use thiserror::Error;

    /// Failures raised while interpolating f(0) from a point set.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("insufficient points: threshold {required}, available {available}")]
        InsufficientPoints { required: usize, available: usize },
        #[error("points {first} and {second} share the abscissa x = {x}")]
        CoincidentAbscissae {
            x: BigInt,
            first: usize,
            second: usize,
        },
        #[error("interpolated value {numerator}/{denominator} is not an integer")]
        NonIntegerInterpolation {
            numerator: BigInt,
            denominator: BigInt,
        },
    }
}

pub use digits::Error as DigitError;
pub use interpolation::Error as InterpolationError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Digits(#[from] DigitError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;

impl InterpolationError {
    pub(crate) fn coincident(x: &BigInt, first: usize, second: usize) -> Self {
        InterpolationError::CoincidentAbscissae {
            x: x.clone(),
            first,
            second,
        }
    }
}
