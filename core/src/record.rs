//! The JSON share record handed to the reconstruction layer.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every member other than `keys` is a share keyed by its decimal x-coordinate.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ReconstructResult;
use crate::params::ThresholdParams;

/// One share as written in the record: a digit string and the base it is in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedShare {
    #[serde(deserialize_with = "base_text")]
    pub base: String,
    pub value: String,
}

impl EncodedShare {
    pub fn new(base: impl ToString, value: impl Into<String>) -> Self {
        EncodedShare {
            base: base.to_string(),
            value: value.into(),
        }
    }
}

/// A complete share record: threshold descriptor plus shares keyed by x.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub keys: ThresholdParams,
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

impl ShareRecord {
    pub fn new(keys: ThresholdParams) -> Self {
        ShareRecord {
            keys,
            shares: BTreeMap::new(),
        }
    }

    /// Builder-style insertion of a share at decimal key `x`.
    pub fn with_share(mut self, x: impl ToString, share: EncodedShare) -> Self {
        self.shares.insert(x.to_string(), share);
        self
    }

    pub fn from_json_str(json: &str) -> ReconstructResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> ReconstructResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_string(&self) -> ReconstructResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Accept the base either as text (`"16"`) or as a bare JSON number (`16`).
fn base_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Base {
        Text(String),
        Number(u64),
    }

    Ok(match Base::deserialize(deserializer)? {
        Base::Text(text) => text,
        Base::Number(number) => number.to_string(),
    })
}
