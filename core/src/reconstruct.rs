//! Recover the secret (f(0)) from a share record.

use std::fmt;

use num_bigint::BigInt;
use tracing::{info, instrument};

use math::lagrange::interpolate_at_zero_with;

use crate::error::ReconstructResult;
use crate::params::{ReconstructOptions, ThresholdParams};
use crate::record::ShareRecord;
use crate::shares::{DecodedShare, ShareSet};

/// Outcome of a reconstruction, with enough context to report it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconstruction {
    pub params: ThresholdParams,
    pub available: usize,
    pub selected: Vec<DecodedShare>,
    pub secret: BigInt,
}

impl Reconstruction {
    /// Parse one JSON record and reconstruct it with default options.
    pub fn from_json_str(json: &str) -> ReconstructResult<Self> {
        let record = ShareRecord::from_json_str(json)?;
        reconstruct_with(&record, &ReconstructOptions::default())
    }
}

impl fmt::Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}, k = {}", self.params.total, self.params.threshold)?;
        writeln!(f, "Total points available: {}", self.available)?;
        writeln!(f, "Points needed for interpolation: {}", self.params.threshold)?;
        writeln!(f)?;
        writeln!(f, "Decoded points:")?;
        for share in &self.selected {
            writeln!(f, "  {share}")?;
        }
        writeln!(f)?;
        write!(f, "Secret (constant term): {}", self.secret)
    }
}

/// Recover the secret from `record` using exact division.
pub fn reconstruct_secret(record: &ShareRecord) -> ReconstructResult<BigInt> {
    reconstruct_with(record, &ReconstructOptions::default()).map(|r| r.secret)
}

/// Decode every share, sort by x and interpolate the first `k` at zero.
#[instrument(
    level = "debug",
    skip_all,
    fields(n = record.keys.total, k = record.keys.threshold, policy = ?options.policy)
)]
pub fn reconstruct_with(
    record: &ShareRecord,
    options: &ReconstructOptions,
) -> ReconstructResult<Reconstruction> {
    let set = ShareSet::decode(record)?;
    let secret =
        interpolate_at_zero_with(set.shares(), set.threshold(), options.policy)?;

    info!(available = set.len(), %secret, "reconstructed secret");

    Ok(Reconstruction {
        params: set.params(),
        available: set.len(),
        selected: set.selected().to_vec(),
        secret,
    })
}
