//! Arbitrary-precision integer backend (`num_bigint::BigInt`)
//!
//! Exact at any magnitude. Repeated multiplication grows operand size, so
//! long operation chains over this backend cost more per step as they go
//! (a cost characteristic, not a correctness concern). Division does not close
//! over the integers, so there is no [`Inverse`](crate::inverse::Inverse)
//! impl here.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::ring::Ring;
use crate::scalar::Scalar;

impl Ring for BigInt {
    type Real = BigInt;
    type Quad = BigInt;

    const DIM: usize = 1;

    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn conj(&self) -> Self {
        self.clone()
    }

    fn quadrance(&self) -> Self {
        self * self
    }

    fn norm(&self) -> Self {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_zero_divisor(&self) -> bool {
        Zero::is_zero(self)
    }

    fn scale(&self, k: &Self) -> Self {
        self * k
    }

    /// Truncating quotient; `k` must be non-zero.
    fn unscale(&self, k: &Self) -> Self {
        self / k
    }

    fn write_parts(&self, out: &mut Vec<Self>) {
        out.push(self.clone());
    }

    fn from_parts<I: Iterator<Item = Self>>(parts: &mut I) -> Option<Self> {
        parts.next()
    }
}

impl Scalar for BigInt {
    fn is_negative(&self) -> bool {
        Signed::is_negative(self)
    }

    fn abs(&self) -> Self {
        Signed::abs(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_arithmetic() {
        let a = BigInt::from(1_000_000_007i64);
        let sq = a.quadrance();
        assert_eq!(sq, &a * &a);
        assert_eq!(sq.unscale(&a), a);
    }

    #[test]
    fn test_truncating_unscale() {
        let seven = BigInt::from(7);
        let two = BigInt::from(2);
        assert_eq!(seven.unscale(&two), BigInt::from(3));
    }
}
