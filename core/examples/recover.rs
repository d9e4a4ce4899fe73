use num_bigint::BigUint;

use shamir_core::shamir::{find_actual_secret, reconstruct_secret, Share};

const MODULUS: u32 = 17;
const THRESHOLD: usize = 2;

/// Recover the constant term of f(x) = 5 + 3x mod 17 from four shares,
/// one of which is corrupted. Blind reconstruction from a pair containing
/// the bad share goes wrong; the vote across all pairs does not.
fn main() {
    let modulus = BigUint::from(MODULUS);
    let shares: Vec<Share> = [(1u32, 8u32), (2, 11), (3, 14), (4, 2)]
        .iter()
        .map(|&(x, y)| Share::new(BigUint::from(x), BigUint::from(y)))
        .collect();

    let blind = reconstruct_secret(&shares[2..], &modulus)
        .expect("distinct abscissae should interpolate");
    let voted = find_actual_secret(&shares, THRESHOLD, &modulus)
        .expect("consensus should succeed");

    assert_eq!(
        voted,
        BigUint::from(5u32),
        "majority vote should recover the true constant term"
    );
    assert!(
        blind != voted,
        "a pair containing the corrupted share must disagree with the vote"
    );

    println!("Blind reconstruction from the last two shares: {blind}");
    println!("Majority vote across all pairs: {voted}");
}
