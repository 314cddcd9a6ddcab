use itertools::Itertools;
use math::error::InterpolationError;
use num_bigint::{BigInt, BigUint};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shamir_core::{
    reconstruct_secret, reconstruct_with, ReconstructError, ReconstructOptions,
    Reconstruction, ShareRecord,
};

use crate::{encode_record, record_json, ShareSpec};

fn random_coefficients(rng: &mut StdRng, count: usize, limbs: usize) -> Vec<BigInt> {
    (0..count)
        .map(|_| {
            let digits: Vec<u32> = (0..limbs).map(|_| rng.random()).collect();
            BigInt::from(BigUint::new(digits))
        })
        .collect()
}

fn random_specs(rng: &mut StdRng, xs: &[i64]) -> Vec<ShareSpec> {
    xs.iter()
        .map(|&x| ShareSpec {
            x,
            radix: rng.random_range(2..=36),
            uppercase: rng.random_bool(0.5),
        })
        .collect()
}

fn restrict(record: &ShareRecord, keys: &[&String]) -> ShareRecord {
    let mut sub = record.clone();
    sub.shares.retain(|key, _| keys.contains(&key));
    sub.keys.total = sub.shares.len();
    sub
}

#[test]
fn test_complete_workflow() {
    let mut rng = StdRng::seed_from_u64(0x5EC2E7);

    for threshold in 1..=8 {
        let coefficients = random_coefficients(&mut rng, threshold, 4);
        let xs: Vec<i64> = (1..=threshold as i64 + 3).collect();
        let specs = random_specs(&mut rng, &xs);
        let record = encode_record(&coefficients, &specs).expect("non-negative samples");

        // round trip through JSON text as the original driver did
        let parsed = ShareRecord::from_json_str(&record_json(&record)).expect("record parses");
        assert_eq!(parsed, record);

        let exact = reconstruct_secret(&parsed).expect("reconstruction succeeds");
        let truncating = reconstruct_with(&parsed, &ReconstructOptions::truncating())
            .expect("reconstruction succeeds")
            .secret;

        assert_eq!(exact, coefficients[0], "threshold {threshold}");
        assert_eq!(truncating, coefficients[0], "threshold {threshold}");
    }
}

#[test]
fn every_threshold_subset_recovers_the_secret() {
    let mut rng = StdRng::seed_from_u64(7);
    let coefficients = random_coefficients(&mut rng, 4, 6);

    let mut xs: Vec<i64> = (1..=60).collect();
    xs.shuffle(&mut rng);
    xs.truncate(7);

    let record = encode_record(&coefficients, &random_specs(&mut rng, &xs))
        .expect("non-negative samples");
    let keys: Vec<&String> = record.shares.keys().collect();

    for subset in keys.iter().copied().combinations(4) {
        let sub = restrict(&record, &subset);
        assert_eq!(
            reconstruct_secret(&sub).expect("subset reconstructs"),
            coefficients[0],
            "subset {subset:?}"
        );
    }
}

#[test]
fn sparse_abscissae_need_exact_division() {
    // f(x) = x^2 + 1 at x = 1, 2, 4: per-term truncation loses the remainders
    let coefficients = vec![BigInt::from(1), BigInt::from(0), BigInt::from(1)];
    let specs: Vec<ShareSpec> = [1, 2, 4]
        .into_iter()
        .map(|x| ShareSpec { x, radix: 10, uppercase: false })
        .collect();
    let record = encode_record(&coefficients, &specs).expect("non-negative samples");

    assert_eq!(reconstruct_secret(&record).unwrap(), BigInt::from(1));
    let truncating = reconstruct_with(&record, &ReconstructOptions::truncating())
        .unwrap()
        .secret;
    assert_ne!(truncating, BigInt::from(1));
}

#[test]
fn tampered_share_is_detected_or_changes_the_secret() {
    let mut rng = StdRng::seed_from_u64(99);
    let coefficients = random_coefficients(&mut rng, 3, 2);
    let specs: Vec<ShareSpec> = [2, 5, 11]
        .into_iter()
        .map(|x| ShareSpec { x, radix: 16, uppercase: false })
        .collect();
    let mut record = encode_record(&coefficients, &specs).expect("non-negative samples");

    let share = record.shares.get_mut("5").expect("share present");
    share.value.push('1');

    match reconstruct_secret(&record) {
        Ok(secret) => assert_ne!(secret, coefficients[0]),
        Err(err) => assert!(matches!(
            err,
            ReconstructError::Interpolation(InterpolationError::NonIntegerInterpolation { .. })
        )),
    }
}

#[test]
fn two_hundred_digit_binary_shares() {
    let constant = BigInt::from(BigUint::from(1u8) << 199usize) + BigInt::from(12345);
    let coefficients = vec![constant.clone(), BigInt::from(3)];
    let specs = vec![
        ShareSpec { x: 1, radix: 2, uppercase: false },
        ShareSpec { x: 2, radix: 2, uppercase: false },
    ];
    let record = encode_record(&coefficients, &specs).expect("non-negative samples");
    assert!(record.shares.values().all(|share| share.value.len() == 200));

    let reconstruction = Reconstruction::from_json_str(&record_json(&record)).unwrap();
    assert_eq!(reconstruction.secret, constant);
}
