//! Positional digit strings in radix 2..=36 decoded into unbounded integers.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::DigitError;

/// A validated numeral base in `[2, 36]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub fn new(radix: u32) -> Result<Self, DigitError> {
        if (Self::MIN..=Self::MAX).contains(&radix) {
            Ok(Radix(radix))
        } else {
            Err(DigitError::InvalidRadix(radix))
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Map `character` to its digit value and check it against this radix.
    ///
    /// A letter is only a numeral when the radix reaches it (`a` from base 11
    /// up), so letters past the radix are invalid characters. A decimal digit
    /// at or above the radix is out of range.
    pub fn digit(self, character: char, digits: &str) -> Result<u32, DigitError> {
        let digit = digit_value(character)
            .filter(|&digit| character.is_ascii_digit() || digit < self.0)
            .ok_or_else(|| DigitError::InvalidDigitCharacter {
                character,
                digits: digits.to_owned(),
            })?;

        if digit >= self.0 {
            return Err(DigitError::DigitOutOfRange {
                digit,
                radix: self.0,
                digits: digits.to_owned(),
            });
        }

        Ok(digit)
    }
}

impl TryFrom<u32> for Radix {
    type Error = DigitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Radix::new(value)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeral value of `character`: `0-9` then case-insensitive `a-z` for 10..=35.
#[inline]
pub fn digit_value(character: char) -> Option<u32> {
    character.to_digit(Radix::MAX)
}

/// Decode `digits` written in `radix` into an exact non-negative integer.
///
/// Characters are consumed from the least significant (rightmost) position;
/// each contributes `digit * radix^position`. Neither signs nor radix prefixes
/// are accepted.
///
/// ```
/// use math::digits::decode;
/// use num_bigint::BigUint;
///
/// assert_eq!(decode("213", 4).unwrap(), BigUint::from(39u32));
/// assert_eq!(decode("fF", 16).unwrap(), BigUint::from(255u32));
/// ```
pub fn decode(digits: &str, radix: u32) -> Result<BigUint, DigitError> {
    let radix = Radix::new(radix)?;
    if digits.is_empty() {
        return Err(DigitError::EmptyDigits);
    }

    let base = BigUint::from(radix.get());
    let mut value = BigUint::zero();
    let mut multiplier = BigUint::one();

    for character in digits.chars().rev() {
        let digit = radix.digit(character, digits)?;
        if digit != 0 {
            value += &multiplier * BigUint::from(digit);
        }
        multiplier *= &base;
    }

    Ok(value)
}

/// [`decode`] lifted into a signed integer so it can serve as an ordinate.
pub fn decode_signed(digits: &str, radix: u32) -> Result<BigInt, DigitError> {
    decode(digits, radix).map(BigInt::from)
}
