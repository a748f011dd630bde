//! Arbitrary-precision float backend (`astro-float` adapter)
//!
//! [`Mpf`] wraps [`astro_float::BigFloat`] behind the scalar capability set,
//! fixing the working precision and rounding mode at the adapter boundary so
//! the doubling engine never has to thread them through every operation.
//! Both are exposed through pass-through accessors; neither is algorithmically
//! relevant to the engine.
//!
//! Like `f64`, this backend is inexact: identities hold up to rounding, and
//! NaN/∞ propagate silently through the doubling formulas.

use std::fmt;

use astro_float::{BigFloat, RoundingMode};

use crate::error::{Error, Result};
use crate::inverse::Inverse;
use crate::ring::Ring;
use crate::scalar::Scalar;

/// Working precision of every [`Mpf`] operation, in bits of mantissa
pub const PRECISION: usize = 128;

/// Rounding mode of every [`Mpf`] operation
pub const ROUNDING: RoundingMode = RoundingMode::ToEven;

/// Arbitrary-precision floating-point scalar
///
/// A thin newtype over [`astro_float::BigFloat`] with the crate's fixed
/// working precision. Construct from an `f64` seed or from a ready-made
/// `BigFloat`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mpf(BigFloat);

impl Mpf {
    /// Wrap an existing `BigFloat`
    pub fn new(value: BigFloat) -> Self {
        Self(value)
    }

    /// Create from an `f64` value at the working precision
    pub fn from_f64(value: f64) -> Self {
        Self(BigFloat::from_f64(value, PRECISION))
    }

    /// Working precision in bits (pass-through accessor)
    pub fn precision(&self) -> usize {
        PRECISION
    }

    /// Rounding mode applied by every operation (pass-through accessor)
    pub fn rounding_mode(&self) -> RoundingMode {
        ROUNDING
    }

    /// Borrow the underlying `BigFloat`
    pub fn as_bigfloat(&self) -> &BigFloat {
        &self.0
    }

    /// Unwrap into the underlying `BigFloat`
    pub fn into_bigfloat(self) -> BigFloat {
        self.0
    }
}

impl fmt::Display for Mpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Ring for Mpf {
    type Real = Mpf;
    type Quad = Mpf;

    const DIM: usize = 1;

    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    fn one() -> Self {
        Self::from_f64(1.0)
    }

    fn add(&self, other: &Self) -> Self {
        Self(self.0.add(&other.0, PRECISION, ROUNDING))
    }

    fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    fn sub(&self, other: &Self) -> Self {
        Self(self.0.sub(&other.0, PRECISION, ROUNDING))
    }

    fn mul(&self, other: &Self) -> Self {
        Self(self.0.mul(&other.0, PRECISION, ROUNDING))
    }

    fn conj(&self) -> Self {
        self.clone()
    }

    fn quadrance(&self) -> Self {
        self.mul(self)
    }

    fn norm(&self) -> Self {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_zero_divisor(&self) -> bool {
        self.0.is_zero()
    }

    fn scale(&self, k: &Self) -> Self {
        self.mul(k)
    }

    fn unscale(&self, k: &Self) -> Self {
        Self(self.0.div(&k.0, PRECISION, ROUNDING))
    }

    fn write_parts(&self, out: &mut Vec<Self>) {
        out.push(self.clone());
    }

    fn from_parts<I: Iterator<Item = Self>>(parts: &mut I) -> Option<Self> {
        parts.next()
    }
}

impl Scalar for Mpf {
    fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl Inverse for Mpf {
    fn try_inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::ZeroInverse);
        }
        Ok(Self::one().unscale(self))
    }
}
