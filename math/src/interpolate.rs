//! Lagrange interpolation evaluated at x = 0.
//!
//! Recovering the constant term of the unique polynomial through a set of
//! points is the core of threshold secret reconstruction: the secret is
//! f(0), and any k distinct points of a degree k-1 polynomial determine it.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::InterpolationError;
use crate::field;

/// Evaluates at x = 0 the unique polynomial through the given points,
/// mod the given prime.
///
/// The combination must be non-empty and the abscissae pairwise distinct
/// mod p. A single point yields its own ordinate reduced mod p, since the
/// polynomial through one point is constant.
pub fn interpolate_at_zero(
    points: &[(BigUint, BigUint)],
    modulus: &BigUint,
) -> Result<BigUint, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::EmptyCombination);
    }

    let mut secret = BigUint::zero();
    for (j, (x_j, y_j)) in points.iter().enumerate() {
        let mut numerator = BigUint::from(1u32);
        let mut denominator = BigUint::from(1u32);
        for (m, (x_m, _)) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            numerator = field::multiply(&numerator, &field::negate(x_m, modulus), modulus);
            denominator = field::multiply(
                &denominator,
                &field::subtract(x_j, x_m, modulus),
                modulus,
            );
        }

        // A zero denominator factor means two abscissae coincide mod p.
        let denominator_inverse = field::inverse(&denominator, modulus)
            .map_err(|_| InterpolationError::DuplicateAbscissa)?;

        let basis = field::multiply(&numerator, &denominator_inverse, modulus);
        let term = field::multiply(y_j, &basis, modulus);
        secret = field::add(&secret, &term, modulus);
    }

    Ok(secret)
}
