//! Serde model and skip-and-continue runner for raw test cases.
//!
//! A test case pairs a threshold with a list of encoded shares. The runner
//! is deliberately lenient: a case that cannot produce a secret is skipped
//! with a warning, never aborting the cases after it.

use num_bigint::BigUint;
use serde::Deserialize;
use tracing::warn;

use crate::decode::{decode_share, RawValue};
use crate::shamir::{find_actual_secret, Share};

/// One share entry as published in a test case: a decimal abscissa plus
/// its encoded ordinate.
#[derive(Clone, Debug, Deserialize)]
pub struct RawShare {
    pub x: String,
    #[serde(flatten)]
    pub value: RawValue,
}

/// A single recovery problem: the threshold plus every published share.
#[derive(Clone, Debug, Deserialize)]
pub struct TestCase {
    pub threshold: usize,
    pub shares: Vec<RawShare>,
}

/// Parse a JSON array of test cases.
pub fn parse_test_cases(json: &str) -> serde_json::Result<Vec<TestCase>> {
    serde_json::from_str(json)
}

/// Decode every share of a test case, dropping malformed entries and exact
/// duplicates. The result is sorted by (x, y); shares agreeing on x but
/// not on y are both kept, interpolation decides between them later.
pub fn decode_shares(case: &TestCase) -> Vec<Share> {
    let mut shares: Vec<Share> = case
        .shares
        .iter()
        .filter_map(|raw| decode_share(&raw.x, &raw.value))
        .collect();
    shares.sort();
    shares.dedup();
    shares
}

/// Run one test case against the given modulus.
///
/// Skips the case (returning `None` and warning) when too few shares
/// survive decoding or when the consensus step fails.
pub fn run_case(case: &TestCase, modulus: &BigUint) -> Option<BigUint> {
    let shares = decode_shares(case);
    if shares.len() < case.threshold {
        warn!(
            valid = shares.len(),
            threshold = case.threshold,
            "skipping test case with too few valid shares"
        );
        return None;
    }

    match find_actual_secret(&shares, case.threshold, modulus) {
        Ok(secret) => Some(secret),
        Err(error) => {
            warn!(%error, "skipping test case without a recoverable secret");
            None
        }
    }
}

/// Run every test case, keeping `(case index, secret)` for the ones that
/// produce a result. A skipped case never aborts its successors.
pub fn run_all(cases: &[TestCase], modulus: &BigUint) -> Vec<(usize, BigUint)> {
    cases
        .iter()
        .enumerate()
        .filter_map(|(index, case)| {
            run_case(case, modulus).map(|secret| (index, secret))
        })
        .collect()
}
