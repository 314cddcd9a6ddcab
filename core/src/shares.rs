use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use tracing::{debug, warn};

use math::digits::{decode_signed, Radix};
use math::point::{sort_by_abscissa, Point};
use math::traits::PointSource;

use crate::error::{ReconstructError, ReconstructResult};
use crate::params::ThresholdParams;
use crate::record::{EncodedShare, ShareRecord};

/// A share decoded into a point, keeping the encoding it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedShare {
    pub point: Point,
    pub radix: Radix,
    pub encoded: String,
}

impl DecodedShare {
    /// Decode the share stored under decimal key `key`.
    pub fn decode(key: &str, share: &EncodedShare) -> ReconstructResult<Self> {
        let x = parse_abscissa(key)
            .ok_or_else(|| ReconstructError::InvalidAbscissa(key.to_owned()))?;

        let radix = share
            .base
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|base| Radix::new(base).ok())
            .ok_or_else(|| ReconstructError::InvalidBase {
                x: key.to_owned(),
                base: share.base.clone(),
            })?;

        let y = decode_signed(&share.value, radix.get()).map_err(|source| {
            ReconstructError::Decode {
                x: key.to_owned(),
                source,
            }
        })?;

        Ok(DecodedShare {
            point: Point::from((x, y)),
            radix,
            encoded: share.value.clone(),
        })
    }
}

impl PointSource for DecodedShare {
    fn x(&self) -> &BigInt {
        self.point.x()
    }

    fn y(&self) -> &BigInt {
        self.point.y()
    }
}

impl fmt::Display for DecodedShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - decoded from '{}' in base {}",
            self.point, self.encoded, self.radix
        )
    }
}

/// Parse a plain decimal key (`-?[0-9]+`); signs like `+` and `_` separators
/// are not accepted.
fn parse_abscissa(key: &str) -> Option<BigInt> {
    let key = key.trim();
    let magnitude = key.strip_prefix('-').unwrap_or(key);
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::from_str(key).ok()
}

/// All shares of a record, decoded and sorted by ascending x.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    params: ThresholdParams,
    shares: Vec<DecodedShare>,
}

impl ShareSet {
    /// Validate the threshold, decode every share and sort them by x.
    pub fn decode(record: &ShareRecord) -> ReconstructResult<Self> {
        record.keys.validate()?;

        if record.shares.len() != record.keys.total {
            warn!(
                declared = record.keys.total,
                present = record.shares.len(),
                "share count differs from the declared n"
            );
        }

        let mut shares = record
            .shares
            .iter()
            .map(|(key, share)| {
                let decoded = DecodedShare::decode(key, share)?;
                debug!(
                    x = %decoded.point.x(),
                    base = decoded.radix.get(),
                    digits = decoded.encoded.len(),
                    "decoded share"
                );
                Ok(decoded)
            })
            .collect::<ReconstructResult<Vec<_>>>()?;

        sort_by_abscissa(&mut shares);

        Ok(ShareSet {
            params: record.keys,
            shares,
        })
    }

    pub fn params(&self) -> ThresholdParams {
        self.params
    }

    pub fn threshold(&self) -> usize {
        self.params.threshold
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Every decoded share, sorted by x.
    pub fn shares(&self) -> &[DecodedShare] {
        &self.shares
    }

    /// The first `k` shares by ascending x (fewer if the record is short).
    pub fn selected(&self) -> &[DecodedShare] {
        &self.shares[..self.threshold().min(self.shares.len())]
    }

    pub fn points(&self) -> Vec<Point> {
        self.shares.iter().map(|share| share.point.clone()).collect()
    }
}
