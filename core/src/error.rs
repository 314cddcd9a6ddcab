use math::error::{DigitError, InterpolationError};
use thiserror::Error;

/// Result type specialized for reconstruction operations.
pub type ReconstructResult<T> = std::result::Result<T, ReconstructError>;

/// Errors that can arise while decoding a share record and recovering its secret.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error(
        "Invalid threshold configuration: threshold {threshold} must be within 1..={total}"
    )]
    InvalidThreshold { threshold: usize, total: usize },
    #[error("Invalid share key {0:?}: expected a decimal x-coordinate")]
    InvalidAbscissa(String),
    #[error("Invalid base {base:?} for share x = {x}")]
    InvalidBase { x: String, base: String },
    #[error("Share x = {x}: {source}")]
    Decode {
        x: String,
        #[source]
        source: DigitError,
    },
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error("Malformed share record: {0}")]
    Record(#[from] serde_json::Error),
}
