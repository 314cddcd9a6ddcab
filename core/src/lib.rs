//! Share-record layer: parse a threshold record, decode its mixed-radix
//! shares and recover the polynomial's constant term.

pub mod error;
pub mod params;
pub mod reconstruct;
pub mod record;
pub mod shares;

pub use error::{ReconstructError, ReconstructResult};
pub use params::{ReconstructOptions, ThresholdParams};
pub use reconstruct::{reconstruct_secret, reconstruct_with, Reconstruction};
pub use record::{EncodedShare, ShareRecord};
pub use shares::{DecodedShare, ShareSet};
