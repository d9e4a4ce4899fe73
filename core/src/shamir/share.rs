use num_bigint::BigUint;

/// A single point (x, f(x)) sampled from the sharing polynomial.
///
/// Ordering compares x first and then y, so a sorted share list groups
/// colliding abscissae together.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Share {
    pub x: BigUint,
    pub y: BigUint,
}

impl Share {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Share { x, y }
    }

    /// The share as an owned (x, y) pair.
    pub fn point(&self) -> (BigUint, BigUint) {
        (self.x.clone(), self.y.clone())
    }
}
