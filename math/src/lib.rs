//! Exact integer primitives for threshold reconstruction: mixed-radix digit
//! decoding and Lagrange interpolation at zero over unbounded integers.

pub mod digits;
pub mod error;
pub mod lagrange;
mod macros;
pub mod point;
pub mod prelude;
pub mod traits;

pub use error::{MathError, Result};
pub use point::Point;
