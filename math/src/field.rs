//! Modular arithmetic over an explicitly supplied prime modulus.
//!
//! Every operation takes the modulus as a parameter; there is no ambient
//! field configuration. Inputs may exceed the modulus and are reduced;
//! results are always normalized into [0, p).

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::FieldError;

/// Sum of `a` and `b` mod p.
pub fn add(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a + b) % modulus
}

/// Additive inverse of `a` mod p.
pub fn negate(a: &BigUint, modulus: &BigUint) -> BigUint {
    let reduced = a % modulus;
    if reduced.is_zero() {
        reduced
    } else {
        modulus - reduced
    }
}

/// Product of `a` and `b` mod p.
pub fn multiply(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a * b) % modulus
}

/// Difference `a - b` mod p, normalized into [0, p).
///
/// Adds p before subtracting so the unsigned representation never
/// underflows.
pub fn subtract(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    ((a % modulus) + modulus - (b % modulus)) % modulus
}

/// Multiplicative inverse of `a` mod p via Fermat's little theorem.
///
/// The modulus must be at least 2 and is assumed prime; primality is not
/// checked. Fails with [`FieldError::DivisionByZero`] when `a` is congruent
/// to 0 mod p, or when the verification product `a * a^(p-2)` is not 1
/// (possible only for a composite modulus).
pub fn inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint, FieldError> {
    let reduced = a % modulus;
    if reduced.is_zero() {
        return Err(FieldError::DivisionByZero);
    }

    let inverted = reduced.modpow(&(modulus - 2u32), modulus);
    if !((&inverted * &reduced) % modulus).is_one() {
        return Err(FieldError::DivisionByZero);
    }
    Ok(inverted)
}
