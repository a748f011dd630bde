//! The doubling construction
//!
//! [`Double<C, F>`] is an ordered pair of components of the next system
//! down, with arithmetic supplied by the flavor parameter `F`. Stacking the
//! type builds the whole menu of hypercomplex systems:
//!
//! ```text
//! Double<i64, Elliptic>                          complex integers (dim 2)
//! Double<Double<i64, Elliptic>, Elliptic>        quaternions (dim 4)
//! Double<Double<Double<..>, ..>, Elliptic>       octonions (dim 8)
//! ```
//!
//! Values are immutable: every operation builds a fresh result, and input
//! and output storage are never aliased.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::flavor::Flavor;
use crate::inverse::Inverse;
use crate::render::UnitNames;
use crate::ring::Ring;

/// An ordered pair `(l, r)` of components, doubled under flavor `F`.
///
/// The flavor is a compile-time choice; two doubles of the same component
/// type but different flavors are unrelated types and cannot be mixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Double<C, F> {
    pub(crate) l: C,
    pub(crate) r: C,
    flavor: PhantomData<F>,
}

impl<C, F> Double<C, F> {
    /// Build a value from a pair of next-lower-level components
    pub fn new(l: C, r: C) -> Self {
        Self {
            l,
            r,
            flavor: PhantomData,
        }
    }

    /// The left (principal) half
    pub fn left(&self) -> &C {
        &self.l
    }

    /// The right (doubled) half
    pub fn right(&self) -> &C {
        &self.r
    }

    /// Split back into the component pair
    pub fn into_pair(self) -> (C, C) {
        (self.l, self.r)
    }
}

impl<C: Ring, F: Flavor> Double<C, F> {
    /// Star involution that conjugates the inherited half only: `(l̄, r)`
    pub fn star_left(&self) -> Self {
        Self::new(self.l.conj(), self.r.clone())
    }

    /// Star involution that flips the new axis only: `(l, −r)`
    pub fn star_right(&self) -> Self {
        Self::new(self.l.clone(), self.r.neg())
    }

    /// Dilation by a component-level value: both halves multiplied by `k`
    /// on the right
    pub fn dilate(&self, k: &C) -> Self {
        Self::new(self.l.mul(k), self.r.mul(k))
    }

    /// Contraction by a component-level value: dilation by `k⁻¹`.
    ///
    /// # Errors
    ///
    /// `ZeroDenominator`/`ZeroDivisorDenominator` when `k` has no inverse.
    pub fn contract(&self, k: &C) -> Result<Self>
    where
        C: Inverse,
    {
        let ki = k.try_inv().map_err(Error::into_denominator)?;
        Ok(self.dilate(&ki))
    }
}

impl<C: Ring, F: Flavor> Ring for Double<C, F> {
    type Real = C::Real;
    type Quad = C;

    const DIM: usize = 2 * C::DIM;

    fn zero() -> Self {
        Self::new(C::zero(), C::zero())
    }

    fn one() -> Self {
        Self::new(C::one(), C::zero())
    }

    fn add(&self, other: &Self) -> Self {
        Self::new(self.l.add(&other.l), self.r.add(&other.r))
    }

    fn neg(&self) -> Self {
        Self::new(self.l.neg(), self.r.neg())
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.l.sub(&other.l), self.r.sub(&other.r))
    }

    fn mul(&self, other: &Self) -> Self {
        F::mul(self, other)
    }

    fn conj(&self) -> Self {
        F::conj(self)
    }

    fn quadrance(&self) -> C {
        F::quadrance(self)
    }

    fn norm(&self) -> Self::Real {
        self.quadrance().norm()
    }

    fn is_zero(&self) -> bool {
        self.l.is_zero() && self.r.is_zero()
    }

    fn is_zero_divisor(&self) -> bool {
        F::is_zero_divisor(self)
    }

    fn scale(&self, k: &Self::Real) -> Self {
        Self::new(self.l.scale(k), self.r.scale(k))
    }

    fn unscale(&self, k: &Self::Real) -> Self {
        Self::new(self.l.unscale(k), self.r.unscale(k))
    }

    fn write_parts(&self, out: &mut Vec<Self::Real>) {
        self.l.write_parts(out);
        self.r.write_parts(out);
    }

    fn from_parts<I: Iterator<Item = Self::Real>>(parts: &mut I) -> Option<Self> {
        let l = C::from_parts(parts)?;
        let r = C::from_parts(parts)?;
        Some(Self::new(l, r))
    }
}

impl<C: Ring, F: Flavor> fmt::Display for Double<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::render::render(self, &UnitNames::generic(Self::DIM)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::{Elliptic, Hyperbolic, Parabolic, Plexification};

    type Cx = Double<i64, Elliptic>;
    type Px = Double<i64, Hyperbolic>;
    type Dx = Double<i64, Parabolic>;
    type Xx = Double<i64, Plexification>;

    #[test]
    fn test_complex_product() {
        // (1 + i)(1 − i) = 2
        let x = Cx::new(1, 1);
        let y = Cx::new(1, -1);
        assert_eq!(x.mul(&y), Cx::new(2, 0));
        assert_eq!(y.mul(&x), Cx::new(2, 0));
    }

    #[test]
    fn test_elliptic_unit_squares_negative() {
        let i = Cx::new(0, 1);
        assert_eq!(i.mul(&i), Cx::new(-1, 0));
    }

    #[test]
    fn test_hyperbolic_unit_squares_positive() {
        let s = Px::new(0, 1);
        assert_eq!(s.mul(&s), Px::new(1, 0));
    }

    #[test]
    fn test_parabolic_unit_is_nilpotent() {
        let e = Dx::new(0, 1);
        assert_eq!(e.mul(&e), Dx::zero());
    }

    #[test]
    fn test_plexification_unit_is_nilpotent() {
        let u = Xx::new(0, 1);
        assert_eq!(u.mul(&u), Xx::zero());
    }

    #[test]
    fn test_quadrance_three_four() {
        // quadrance of 3 + 4i is 25
        let z = Cx::new(3, 4);
        assert_eq!(z.quadrance(), 25);
        assert_eq!(z.norm(), 25);
    }

    #[test]
    fn test_hyperbolic_light_cone_zero_divisors() {
        let z = Px::new(1, 1);
        assert!(z.is_zero_divisor());
        assert!(!z.is_zero());
        // witness: (1 + s)(1 − s) = 0 with both factors non-zero
        let w = Px::new(1, -1);
        assert!(z.mul(&w).is_zero());
    }

    #[test]
    fn test_parabolic_zero_divisor_is_left_check() {
        assert!(Dx::new(0, 5).is_zero_divisor());
        assert!(!Dx::new(2, 5).is_zero_divisor());
    }

    #[test]
    fn test_conj_is_involutive() {
        let z = Cx::new(3, -7);
        assert_eq!(z.conj().conj(), z);
        let d = Dx::new(3, -7);
        assert_eq!(d.conj().conj(), d);
        let u = Xx::new(3, -7);
        assert_eq!(u.conj().conj(), u);
    }

    #[test]
    fn test_scale_matches_repeated_addition() {
        let z = Cx::new(3, -4);
        assert_eq!(z.scale(&2), z.add(&z));
    }

    #[test]
    fn test_unscale_contracts() {
        let z = Cx::new(6, -4);
        assert_eq!(z.unscale(&2), Cx::new(3, -2));
    }

    #[test]
    fn test_parts_round_trip_dim4() {
        type Quat = Double<Double<i64, Elliptic>, Elliptic>;
        let q = Quat::new(Double::new(1, -2), Double::new(3, -4));
        let parts = q.parts();
        assert_eq!(parts, vec![1, -2, 3, -4]);
        assert_eq!(Quat::compose(&parts), Some(q.clone()));
        assert_eq!(q.real(), 1);
        assert_eq!(q.unreal(), vec![-2, 3, -4]);
        assert_eq!(Quat::DIM, 4);
    }

    #[test]
    fn test_dilate_by_component() {
        let z = Cx::new(1, 2);
        let k = Cx::quadrance(&z); // 5, embedded as a scalar component
        assert_eq!(z.dilate(&k), Cx::new(5, 10));
    }
}
