use shamir_core::{Reconstruction, ReconstructOptions, ShareRecord};
use tracing_subscriber::EnvFilter;

const TEST_CASE_1: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

const TEST_CASE_2: &str = r#"{
    "keys": { "n": 10, "k": 7 },
    "1": { "base": "7", "value": "420020006424065463" },
    "2": { "base": "7", "value": "10511630252064643035" },
    "3": { "base": "2", "value": "101010101001100101011100000001000111010010111101100100010" },
    "4": { "base": "8", "value": "31261003022226126015" },
    "5": { "base": "7", "value": "2564201006101516132035" },
    "6": { "base": "15", "value": "a3c97ed550c69484" },
    "7": { "base": "13", "value": "134b08c8739552a734" },
    "8": { "base": "10", "value": "23600283241050447333" },
    "9": { "base": "9", "value": "375870320616068547135" },
    "10": { "base": "6", "value": "30140555423010311322515333" }
}"#;

fn process(case: usize, json: &str) -> Option<Reconstruction> {
    println!("\n=== Processing Test Case {case} ===");
    let result = ShareRecord::from_json_str(json).and_then(|record| {
        shamir_core::reconstruct_with(&record, &ReconstructOptions::default())
    });

    match result {
        Ok(reconstruction) => {
            println!("{reconstruction}");
            Some(reconstruction)
        }
        Err(err) => {
            eprintln!("Error processing test case {case}: {err}");
            None
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Shamir's Secret Sharing - Finding Polynomial Constant Term");

    let results: Vec<_> = [TEST_CASE_1, TEST_CASE_2]
        .iter()
        .enumerate()
        .map(|(idx, json)| process(idx + 1, json))
        .collect();

    println!("\n{}", "=".repeat(50));
    println!("FINAL RESULTS:");
    for (idx, result) in results.iter().enumerate() {
        if let Some(reconstruction) = result {
            println!("Test Case {} Secret: {}", idx + 1, reconstruction.secret);
        }
    }
}
