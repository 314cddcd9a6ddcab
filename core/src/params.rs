use serde::{Deserialize, Serialize};

use math::lagrange::DivisionPolicy;

use crate::error::{ReconstructError, ReconstructResult};

/// The `(n, k)` descriptor carried under a record's `keys` member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThresholdParams {
    /// Declared number of shares (`n`).
    #[serde(rename = "n")]
    pub total: usize,
    /// Number of shares needed to recover the secret (`k`).
    #[serde(rename = "k")]
    pub threshold: usize,
}

impl ThresholdParams {
    pub fn new(total: usize, threshold: usize) -> ReconstructResult<Self> {
        let params = ThresholdParams { total, threshold };
        params.validate()?;
        Ok(params)
    }

    /// Check `1 <= k <= n`.
    pub fn validate(&self) -> ReconstructResult<()> {
        if !validate_threshold_config(self.threshold, self.total) {
            return Err(ReconstructError::InvalidThreshold {
                threshold: self.threshold,
                total: self.total,
            });
        }
        Ok(())
    }
}

/// Returns true when `threshold` shares out of `total` form a usable configuration.
#[inline]
pub fn validate_threshold_config(threshold: usize, total: usize) -> bool {
    (1..=total).contains(&threshold)
}

/// Knobs for [`reconstruct_with`](crate::reconstruct::reconstruct_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconstructOptions {
    pub policy: DivisionPolicy,
}

impl ReconstructOptions {
    /// Options reproducing per-term truncating division.
    pub fn truncating() -> Self {
        ReconstructOptions {
            policy: DivisionPolicy::Truncating,
        }
    }
}
