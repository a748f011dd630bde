//! Doubling flavors
//!
//! A flavor is the sign/conjugation pattern a doubling step uses to multiply
//! ordered pairs. It is a construction-time choice, carried as a zero-sized
//! type parameter of [`Double`](crate::double::Double), never a runtime
//! field, never mixed within one value.
//!
//! With `x = (l₁, r₁)`, `y = (l₂, r₂)` and `ā` the component conjugate:
//!
//! | Flavor            | real part of `x·y` | unreal part of `x·y` |
//! |-------------------|--------------------|----------------------|
//! | [`Elliptic`]      | `l₁l₂ − r̄₂r₁`      | `r₂l₁ + r₁l̄₂`        |
//! | [`Hyperbolic`]    | `l₁l₂ + r̄₂r₁`      | `r₂l₁ + r₁l̄₂`        |
//! | [`Parabolic`]     | `l₁l₂`             | `r₂l₁ + r₁l̄₂`        |
//! | [`Plexification`] | `l₁l₂`             | `l₁r₂ + r₁l₂`        |
//!
//! The conjugate-twisted cross term of the elliptic/hyperbolic rules is what
//! buys the multiplicative norm (the Brahmagupta–Fibonacci composition law).
//! Parabolic drops the feedback into the real part, which makes the new unit
//! nilpotent and, once the component ring stops being commutative, breaks
//! associativity. Plexification drops conjugation entirely, staying
//! commutative and associative but trading the composition law for a ring
//! with zero divisors even over a division-ring base.

use crate::double::Double;
use crate::error::Result;
use crate::inverse::Inverse;
use crate::ring::Ring;

/// Sign/conjugation pattern of one doubling step.
///
/// Implemented only by the four zero-sized markers in this module. The
/// methods define, per flavor, the pieces of arithmetic that differ between
/// constructions; everything shared lives on
/// [`Double`](crate::double::Double) itself.
pub trait Flavor: Copy + Clone + PartialEq + Eq + std::fmt::Debug + 'static {
    /// Flavor name, used in debug rendering
    const NAME: &'static str;

    /// The doubling multiplication rule
    fn mul<C: Ring>(x: &Double<C, Self>, y: &Double<C, Self>) -> Double<C, Self>;

    /// Principal conjugation at this doubling level.
    ///
    /// `(l̄, −r)` for the conjugate-twisted flavors; plexification instead
    /// conjugates both halves (`(l̄, −r̄)`), which is the involution that
    /// anti-distributes over its untwisted multiplication.
    fn conj<C: Ring>(z: &Double<C, Self>) -> Double<C, Self> {
        Double::new(z.l.conj(), z.r.neg())
    }

    /// The quadrance, landing in the component ring.
    ///
    /// Reduces to `l² ± r²` (or `l²`) over a self-conjugate base.
    fn quadrance<C: Ring>(z: &Double<C, Self>) -> C;

    /// The zero-divisor predicate for values built with this flavor.
    fn is_zero_divisor<C: Ring>(z: &Double<C, Self>) -> bool;
}

/// Flavors that admit a general inverse off the zero-divisor set.
///
/// [`Parabolic`] is deliberately absent: iterating it produces
/// non-associative systems with no two-sided inverse in general. The
/// restricted inverses that survive (dual numbers over a field, and the
/// plexified towers built on them) are inherent methods in
/// [`crate::inverse`] instead.
pub trait InverseFlavor: Flavor {
    /// Inverse of a value already known not to be a zero divisor.
    ///
    /// Callers guard with [`Ring::is_zero_divisor`] first; the inner
    /// recursion is then infallible in practice and any error is simply
    /// propagated.
    fn inv<C>(z: &Double<C, Self>) -> Result<Double<C, Self>>
    where
        C: Ring + Inverse;
}

/// Elliptic doubling: `(ac − d̄b, da + bc̄)`.
///
/// The classical Cayley-Dickson rule. Builds complex-like systems at
/// dimension 2, quaternion-like at 4, octonion-like at 8; the norm is
/// multiplicative all the way up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elliptic;

/// Hyperbolic doubling: `(ac + d̄b, da + bc̄)`.
///
/// Sign-flipped variant; the new unit squares to `+1` and the system picks
/// up zero divisors on its light cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hyperbolic;

/// Parabolic doubling: `(ac, da + bc̄)`.
///
/// No feedback into the real part: the new unit is nilpotent. Iterated over
/// a non-commutative component ring this flavor breaks associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parabolic;

/// Commutative doubling ("plexification"): `(ac, ad + bc)`.
///
/// No conjugation at all; the result is isomorphic to `C[u]/(u²)` and stays
/// commutative and associative, with non-trivial zero divisors even over a
/// division-ring component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plexification;

impl Flavor for Elliptic {
    const NAME: &'static str = "elliptic";

    fn mul<C: Ring>(x: &Double<C, Self>, y: &Double<C, Self>) -> Double<C, Self> {
        let real = x.l.mul(&y.l).sub(&y.r.conj().mul(&x.r));
        let unreal = y.r.mul(&x.l).add(&x.r.mul(&y.l.conj()));
        Double::new(real, unreal)
    }

    fn quadrance<C: Ring>(z: &Double<C, Self>) -> C {
        z.l.mul(&z.l.conj()).add(&z.r.conj().mul(&z.r))
    }

    fn is_zero_divisor<C: Ring>(z: &Double<C, Self>) -> bool {
        Self::quadrance(z).is_zero_divisor()
    }
}

impl Flavor for Hyperbolic {
    const NAME: &'static str = "hyperbolic";

    fn mul<C: Ring>(x: &Double<C, Self>, y: &Double<C, Self>) -> Double<C, Self> {
        let real = x.l.mul(&y.l).add(&y.r.conj().mul(&x.r));
        let unreal = y.r.mul(&x.l).add(&x.r.mul(&y.l.conj()));
        Double::new(real, unreal)
    }

    fn quadrance<C: Ring>(z: &Double<C, Self>) -> C {
        z.l.mul(&z.l.conj()).sub(&z.r.conj().mul(&z.r))
    }

    fn is_zero_divisor<C: Ring>(z: &Double<C, Self>) -> bool {
        Self::quadrance(z).is_zero_divisor()
    }
}

impl Flavor for Parabolic {
    const NAME: &'static str = "parabolic";

    fn mul<C: Ring>(x: &Double<C, Self>, y: &Double<C, Self>) -> Double<C, Self> {
        let real = x.l.mul(&y.l);
        let unreal = y.r.mul(&x.l).add(&x.r.mul(&y.l.conj()));
        Double::new(real, unreal)
    }

    fn quadrance<C: Ring>(z: &Double<C, Self>) -> C {
        z.l.mul(&z.l.conj())
    }

    // The unreal half of a parabolic value is absorbed by the nilpotent
    // unit; invertibility is decided by the left half alone, recursively.
    fn is_zero_divisor<C: Ring>(z: &Double<C, Self>) -> bool {
        z.l.is_zero_divisor()
    }
}

impl Flavor for Plexification {
    const NAME: &'static str = "plexification";

    fn mul<C: Ring>(x: &Double<C, Self>, y: &Double<C, Self>) -> Double<C, Self> {
        let real = x.l.mul(&y.l);
        let unreal = x.l.mul(&y.r).add(&x.r.mul(&y.l));
        Double::new(real, unreal)
    }

    fn conj<C: Ring>(z: &Double<C, Self>) -> Double<C, Self> {
        Double::new(z.l.conj(), z.r.conj().neg())
    }

    fn quadrance<C: Ring>(z: &Double<C, Self>) -> C {
        z.l.mul(&z.l.conj())
    }

    fn is_zero_divisor<C: Ring>(z: &Double<C, Self>) -> bool {
        z.l.is_zero_divisor()
    }
}

impl InverseFlavor for Elliptic {
    fn inv<C>(z: &Double<C, Self>) -> Result<Double<C, Self>>
    where
        C: Ring + Inverse,
    {
        // z⁻¹ = z̄ · q⁻¹ with q = quadrance(z), which is central and
        // self-conjugate, so the embedded product is component-wise.
        let qi = Self::quadrance(z).try_inv()?;
        Ok(Double::new(z.l.conj().mul(&qi), z.r.neg().mul(&qi)))
    }
}

impl InverseFlavor for Hyperbolic {
    fn inv<C>(z: &Double<C, Self>) -> Result<Double<C, Self>>
    where
        C: Ring + Inverse,
    {
        let qi = Self::quadrance(z).try_inv()?;
        Ok(Double::new(z.l.conj().mul(&qi), z.r.neg().mul(&qi)))
    }
}

impl InverseFlavor for Plexification {
    fn inv<C>(z: &Double<C, Self>) -> Result<Double<C, Self>>
    where
        C: Ring + Inverse,
    {
        // (l + u·r)⁻¹ = l⁻¹ − u·(l⁻¹ r l⁻¹), u nilpotent. The sandwiched
        // form keeps the identity two-sided over non-commutative components.
        let li = z.l.try_inv()?;
        Ok(Double::new(li.clone(), li.mul(&z.r).mul(&li).neg()))
    }
}
