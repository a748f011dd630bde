//! Inverses and quotients
//!
//! Division is the one place hypercomplex arithmetic can fail, so everything
//! here returns [`Result`]. The rules:
//!
//! - A value has an inverse iff it is not a zero divisor
//!   ([`Ring::is_zero_divisor`]).
//! - Left and right quotients are distinct operations; they only coincide in
//!   commutative systems, and both are always provided.
//! - Towers over integer backends have no `Inverse` impl at all (division
//!   does not close), and parabolic towers have no general inverse (see
//!   [`InverseFlavor`](crate::flavor::InverseFlavor)) beyond the restricted
//!   dual-number case below. The plexified towers built over the dual
//!   numbers miss the blanket impl for the same reason, so they restate
//!   the plexification formula as inherent methods at each level.
//!
//! Callers that cannot guarantee the precondition check
//! `is_zero_divisor` first; the failure is immediate and nothing is
//! retried.

use crate::double::Double;
use crate::error::{Error, Result};
use crate::flavor::{InverseFlavor, Parabolic};
use crate::ring::Ring;
use crate::scalar::Scalar;
use crate::systems::{HyperDual, TriDual};

/// Rings whose non-zero-divisor elements are invertible.
pub trait Inverse: Ring {
    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroInverse`] when the operand is the additive identity,
    /// [`Error::ZeroDivisorInverse`] when it is a non-zero zero divisor.
    fn try_inv(&self) -> Result<Self>;

    /// Left quotient `y⁻¹ · x`; solves `y·q = x` in associative systems.
    ///
    /// # Errors
    ///
    /// `ZeroDenominator`/`ZeroDivisorDenominator` when `y` has no inverse.
    fn quo_l(&self, y: &Self) -> Result<Self> {
        let yi = y.try_inv().map_err(Error::into_denominator)?;
        Ok(yi.mul(self))
    }

    /// Right quotient `x · y⁻¹`; solves `q·y = x` in associative systems.
    ///
    /// # Errors
    ///
    /// `ZeroDenominator`/`ZeroDivisorDenominator` when `y` has no inverse.
    fn quo_r(&self, y: &Self) -> Result<Self> {
        let yi = y.try_inv().map_err(Error::into_denominator)?;
        Ok(self.mul(&yi))
    }
}

impl<C, F> Inverse for Double<C, F>
where
    C: Ring + Inverse,
    F: InverseFlavor,
{
    fn try_inv(&self) -> Result<Self> {
        if self.is_zero_divisor() {
            return Err(if self.is_zero() {
                Error::ZeroInverse
            } else {
                Error::ZeroDivisorInverse
            });
        }
        F::inv(self)
    }
}

impl<S> Double<S, Parabolic>
where
    S: Scalar + Inverse,
{
    /// Restricted inverse for plain dual numbers over a field scalar:
    /// `(a + bε)⁻¹ = a⁻¹ − b·a⁻²·ε`.
    ///
    /// The parabolic flavor has no general inverse, but at one doubling
    /// level over a field the nilpotent part causes no harm. Deeper
    /// parabolic towers get nothing.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroInverse`] for zero, [`Error::ZeroDivisorInverse`] for a
    /// pure-unreal (nilpotent) operand.
    pub fn try_inv(&self) -> Result<Self> {
        if self.is_zero_divisor() {
            return Err(if self.is_zero() {
                Error::ZeroInverse
            } else {
                Error::ZeroDivisorInverse
            });
        }
        let ai = self.l.try_inv()?;
        Ok(Self::new(ai.clone(), self.r.mul(&ai).mul(&ai).neg()))
    }
}

impl<S> HyperDual<S>
where
    S: Scalar + Inverse,
{
    /// Inverse for hyper-dual numbers over a field scalar:
    /// `(l + u·r)⁻¹ = l⁻¹ − u·(l⁻¹·r·l⁻¹)`.
    ///
    /// The component ring `Dual<S>` carries only the restricted inherent
    /// inverse above, not the trait, so the blanket impl does not reach
    /// this type and the plexification formula is restated here.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroInverse`] for zero, [`Error::ZeroDivisorInverse`] when
    /// the head scalar vanishes.
    pub fn try_inv(&self) -> Result<Self> {
        if self.is_zero_divisor() {
            return Err(if self.is_zero() {
                Error::ZeroInverse
            } else {
                Error::ZeroDivisorInverse
            });
        }
        let li = self.l.try_inv()?;
        Ok(Self::new(li.clone(), li.mul(&self.r).mul(&li).neg()))
    }
}

impl<S> TriDual<S>
where
    S: Scalar + Inverse,
{
    /// Inverse for tri-dual numbers over a field scalar, one plexification
    /// level above [`HyperDual`].
    ///
    /// # Errors
    ///
    /// [`Error::ZeroInverse`] for zero, [`Error::ZeroDivisorInverse`] when
    /// the head scalar vanishes.
    pub fn try_inv(&self) -> Result<Self> {
        if self.is_zero_divisor() {
            return Err(if self.is_zero() {
                Error::ZeroInverse
            } else {
                Error::ZeroDivisorInverse
            });
        }
        let li = self.l.try_inv()?;
        Ok(Self::new(li.clone(), li.mul(&self.r).mul(&li).neg()))
    }
}
