use num_bigint::BigUint;
use num_traits::One;

/// Bit length of the default prime modulus.
pub const DEFAULT_MODULUS_BITS: u32 = 127;

/// The default field modulus, the Mersenne prime 2^127 - 1.
///
/// Callers that care about a specific field pass their own prime to the
/// recovery entry points; this value only backs the convenience paths that
/// omit one. It comfortably holds secrets up to 126 bits.
pub fn default_modulus() -> BigUint {
    (BigUint::one() << DEFAULT_MODULUS_BITS) - BigUint::one()
}

/// Validate the relation between threshold and share count.
///
/// A threshold of zero is meaningless (every subset would qualify) and a
/// threshold above the share count leaves nothing to enumerate.
pub fn validate_threshold(threshold: usize, share_count: usize) -> bool {
    (1..=share_count).contains(&threshold)
}
