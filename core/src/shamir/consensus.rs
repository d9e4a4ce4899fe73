use num_bigint::BigUint;

use math::error::InterpolationError;
use math::interpolate_at_zero;

use crate::error::{RecoveryError, RecoveryResult};
use crate::params::validate_threshold;

use super::combinations::Combinations;
use super::share::Share;
use super::tally::VoteTally;

/// Reconstruct the secret from one combination of shares.
///
/// Every share in the combination is trusted: a corrupted share produces a
/// wrong secret with no indication. [`find_actual_secret`] exists for
/// callers that cannot assume honesty.
pub fn reconstruct_secret<'a, I>(
    combination: I,
    modulus: &BigUint,
) -> RecoveryResult<BigUint>
where
    I: IntoIterator<Item = &'a Share>,
{
    let points: Vec<(BigUint, BigUint)> =
        combination.into_iter().map(Share::point).collect();
    Ok(interpolate_at_zero(&points, modulus)?)
}

/// Recover the secret that the most k-share combinations agree on.
///
/// Every k-subset of `shares` is interpolated and the resulting candidates
/// are tallied; honest shares all lie on one polynomial, so as long as
/// enough of the combinations are fully honest their shared constant term
/// wins the vote. The tolerance is statistical: corrupted shares colluding
/// on a single wrong polynomial can still outvote the truth.
///
/// Requires `shares.len() >= threshold >= 1`.
pub fn find_actual_secret(
    shares: &[Share],
    threshold: usize,
    modulus: &BigUint,
) -> RecoveryResult<BigUint> {
    if !validate_threshold(threshold, shares.len()) {
        return Err(RecoveryError::InsufficientShares(threshold, shares.len()));
    }

    let mut tally = VoteTally::new();
    for combination in Combinations::new(shares, threshold) {
        match reconstruct_secret(combination, modulus) {
            Ok(candidate) => tally.record(candidate),
            // Colliding abscissae disqualify this combination, not the run.
            Err(RecoveryError::Interpolation(
                InterpolationError::DuplicateAbscissa,
            )) => {}
            // Combinations of a validated threshold are never empty, so any
            // other error is a real failure.
            Err(error) => return Err(error),
        }
    }

    tally.into_winner().ok_or(RecoveryError::NoConsensus)
}
