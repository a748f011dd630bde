//! Fixed-width signed integer backend (`i64`)
//!
//! Exact arithmetic within the 64-bit range; overflow follows the standard
//! library's debug/release behavior. Division does not close over the
//! integers, so this backend carries no [`Inverse`](crate::inverse::Inverse)
//! impl; integer-backed towers expose no inverse or quotient at any
//! dimension.

use crate::ring::Ring;
use crate::scalar::Scalar;

impl Ring for i64 {
    type Real = i64;
    type Quad = i64;

    const DIM: usize = 1;

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
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
        *self == 0
    }

    fn is_zero_divisor(&self) -> bool {
        *self == 0
    }

    fn scale(&self, k: &Self) -> Self {
        self * k
    }

    /// Truncating quotient; `k` must be non-zero.
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

impl Scalar for i64 {
    fn is_negative(&self) -> bool {
        *self < 0
    }

    fn abs(&self) -> Self {
        i64::abs(*self)
    }
}
