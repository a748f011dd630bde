//! Fixed-width IEEE-754 double backend (`f64`)
//!
//! Inexact: every algebraic identity in this crate holds only up to rounding
//! when instantiated over `f64`, and test suites must compare with a
//! tolerance. Equality in the core remains bit-style `==`, no epsilon.
//! NaN and ∞ propagate silently through the doubling formulas; the core does
//! not treat them as errors.

use crate::error::{Error, Result};
use crate::inverse::Inverse;
use crate::ring::Ring;
use crate::scalar::Scalar;

impl Ring for f64 {
    type Real = f64;
    type Quad = f64;

    const DIM: usize = 1;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
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
        *self
    }

    fn quadrance(&self) -> Self {
        self * self
    }

    fn norm(&self) -> Self {
        *self
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_zero_divisor(&self) -> bool {
        *self == 0.0
    }

    fn scale(&self, k: &Self) -> Self {
        self * k
    }

    fn unscale(&self, k: &Self) -> Self {
        self / k
    }

    fn write_parts(&self, out: &mut Vec<Self>) {
        out.push(*self);
    }

    fn from_parts<I: Iterator<Item = Self>>(parts: &mut I) -> Option<Self> {
        parts.next()
    }
}

impl Scalar for f64 {
    fn is_negative(&self) -> bool {
        *self < 0.0
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }
}

impl Inverse for f64 {
    fn try_inv(&self) -> Result<Self> {
        if *self == 0.0 {
            return Err(Error::ZeroInverse);
        }
        Ok(1.0 / self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        assert_eq!(4.0f64.try_inv().unwrap(), 0.25);
        assert_eq!(0.0f64.try_inv(), Err(Error::ZeroInverse));
    }

    #[test]
    fn test_quotients() {
        assert_eq!(1.0f64.quo_l(&4.0).unwrap(), 0.25);
        assert_eq!(1.0f64.quo_r(&4.0).unwrap(), 0.25);
        assert_eq!(1.0f64.quo_r(&0.0), Err(Error::ZeroDenominator));
    }

    #[test]
    fn test_nan_propagates_silently() {
        let nan = f64::NAN;
        assert!(nan.add(&1.0).is_nan());
        assert!(!nan.is_zero());
    }
}
