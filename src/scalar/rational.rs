//! Arbitrary-precision rational backend (`num_rational::BigRational`)
//!
//! Exact and closed under division: the backend of choice for verifying
//! deep-tower identities (norm multiplicativity in particular) with no
//! rounding anywhere.

use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::inverse::Inverse;
use crate::ring::Ring;
use crate::scalar::Scalar;

impl Ring for BigRational {
    type Real = BigRational;
    type Quad = BigRational;

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

    /// Exact quotient; `k` must be non-zero.
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

impl Scalar for BigRational {
    fn is_negative(&self) -> bool {
        Signed::is_negative(self)
    }

    fn abs(&self) -> Self {
        Signed::abs(self)
    }
}

impl Inverse for BigRational {
    fn try_inv(&self) -> Result<Self> {
        if Zero::is_zero(self) {
            return Err(Error::ZeroInverse);
        }
        Ok(self.recip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_exact_inverse() {
        let x = rat(3, 7);
        assert_eq!(x.try_inv().unwrap(), rat(7, 3));
        assert_eq!(x.mul(&x.try_inv().unwrap()), rat(1, 1));
        assert_eq!(rat(0, 1).try_inv(), Err(Error::ZeroInverse));
    }

    #[test]
    fn test_double_inverse_round_trip() {
        let x = rat(-22, 5);
        assert_eq!(x.try_inv().unwrap().try_inv().unwrap(), x);
    }
}
