//! Fixtures shared by the cross-crate tests: sample an integer polynomial and
//! write the samples out as a mixed-radix share record.

use math::lagrange::evaluate_polynomial;
use num_bigint::BigInt;
use num_traits::Signed;
use shamir_core::{EncodedShare, ShareRecord, ThresholdParams};

/// One sampled share before encoding: abscissa, radix and whether letters
/// should be written in upper case.
#[derive(Clone, Debug)]
pub struct ShareSpec {
    pub x: i64,
    pub radix: u32,
    pub uppercase: bool,
}

/// Evaluate `coefficients` at every `spec.x` and encode the result in
/// `spec.radix`. The threshold is the number of coefficients.
///
/// Returns `None` when a sample is negative, since digit strings carry no sign.
pub fn encode_record(coefficients: &[BigInt], specs: &[ShareSpec]) -> Option<ShareRecord> {
    let params = ThresholdParams {
        total: specs.len(),
        threshold: coefficients.len(),
    };

    specs.iter().try_fold(ShareRecord::new(params), |record, spec| {
        let y = evaluate_polynomial(coefficients, &BigInt::from(spec.x));
        if y.is_negative() {
            return None;
        }
        let mut digits = y.to_str_radix(spec.radix);
        if spec.uppercase {
            digits = digits.to_uppercase();
        }
        Some(record.with_share(spec.x, EncodedShare::new(spec.radix, digits)))
    })
}

/// Render a record as JSON text, the form the original driver consumed.
pub fn record_json(record: &ShareRecord) -> String {
    serde_json::to_string(record).expect("record serializes")
}

#[cfg(test)]
mod integration;
