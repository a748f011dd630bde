//! The recursive ring capability set
//!
//! Every number system in this crate (base scalars and doubled composites
//! alike) implements [`Ring`]. The trait captures exactly the operations the
//! doubling construction needs from its component type, so that a system of
//! dimension 2N can be built from ordered pairs of a dimension-N system with
//! no knowledge of how deep the tower already is:
//!
//! ```text
//! Scalar (dim 1)  →  Double<Scalar, F> (dim 2)  →  Double<Double<..>, F> (dim 4)  →  ...
//! ```
//!
//! Two members deserve attention:
//!
//! - **`Quad`**: the quadrance of a value lands one level *down* the tower,
//!   not at the base. The quadrance of a dimension-4 value is a dimension-2
//!   value. [`Ring::norm`] is the fully reduced form: quadrance applied
//!   repeatedly until a base scalar comes out.
//! - **`Real`**: the base scalar type of the whole tower. Scaling and
//!   decomposition always speak in terms of `Real`, whatever the dimension.
//!
//! All operations are total pure functions over immutable values; the only
//! fallible operations live in [`crate::inverse`].

use std::fmt;

use crate::scalar::Scalar;

/// Capability set required of every component type in a doubling tower.
///
/// Equality is structural and exact: integer and rational backends compare
/// value-for-value, float backends bit-for-bit. There is no epsilon anywhere
/// in the core; tolerant comparison is a concern of float-backed test suites.
pub trait Ring: Clone + PartialEq + fmt::Debug + fmt::Display + Sized {
    /// The base scalar type at the bottom of this tower
    type Real: Scalar;

    /// The codomain of [`Ring::quadrance`]: the next system down
    type Quad: Ring<Real = Self::Real>;

    /// Number of base-scalar components (1, 2, 4, 8, ...)
    const DIM: usize;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Addition
    fn add(&self, other: &Self) -> Self;

    /// Additive inverse
    fn neg(&self) -> Self;

    /// Subtraction
    ///
    /// Equivalent to `self.add(&other.neg())` by definition.
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplication
    ///
    /// Commutative and associative at the base level only; composite levels
    /// may violate either or both depending on the doubling flavor and the
    /// height of the tower.
    fn mul(&self, other: &Self) -> Self;

    /// Principal conjugation
    ///
    /// The involution consumed by the next doubling level up. Base scalars
    /// are self-conjugate.
    fn conj(&self) -> Self;

    /// Quadrance: the squared-length invariant, one level down the tower.
    ///
    /// For a base scalar `s` this is `s·s`; for a composite it is the
    /// flavor-specific combination of the two halves (see
    /// [`crate::flavor`]).
    fn quadrance(&self) -> Self::Quad;

    /// Norm: quadrance applied repeatedly until a base scalar is reached.
    ///
    /// Each extra doubling level squares the result once, so the norm of a
    /// dimension-8 value built over `Real = S` is a degree-8 polynomial in
    /// its components. Multiplicativity (`norm(x·y) = norm(x)·norm(y)`)
    /// holds for elliptic towers and is the crate's primary regression
    /// property.
    fn norm(&self) -> Self::Real;

    /// Exact equality with the additive identity
    fn is_zero(&self) -> bool;

    /// Zero-divisor predicate.
    ///
    /// True iff the value has no multiplicative inverse in its system. The
    /// additive identity always satisfies this; hyperbolic and nilpotent
    /// systems have non-zero elements that satisfy it too. The predicate is
    /// defined recursively per flavor: elliptic/hyperbolic descend through
    /// the quadrance, parabolic/plexification through the left half only.
    fn is_zero_divisor(&self) -> bool;

    /// Uniform dilation: multiply every base-scalar component by `k`
    fn scale(&self, k: &Self::Real) -> Self;

    /// Uniform contraction: divide every base-scalar component by `k`.
    ///
    /// Exact on field backends, truncating on integer backends (like
    /// integer quotient). `k` must be non-zero for the exact backends;
    /// float backends follow IEEE-754 and produce infinities instead.
    fn unscale(&self, k: &Self::Real) -> Self;

    /// Append this value's base-scalar components, in basis order
    fn write_parts(&self, out: &mut Vec<Self::Real>);

    /// Rebuild a value from a stream of base-scalar components.
    ///
    /// Consumes exactly [`Ring::DIM`] items; returns `None` if the stream
    /// runs dry first.
    fn from_parts<I: Iterator<Item = Self::Real>>(parts: &mut I) -> Option<Self>;

    /// All [`Ring::DIM`] base-scalar components, in basis order
    fn parts(&self) -> Vec<Self::Real> {
        let mut out = Vec::with_capacity(Self::DIM);
        self.write_parts(&mut out);
        out
    }

    /// Rebuild a value from a slice of exactly [`Ring::DIM`] components
    fn compose(parts: &[Self::Real]) -> Option<Self> {
        if parts.len() != Self::DIM {
            return None;
        }
        Self::from_parts(&mut parts.iter().cloned())
    }

    /// The principal ("real") component
    fn real(&self) -> Self::Real {
        let mut out = Vec::with_capacity(Self::DIM);
        self.write_parts(&mut out);
        out.swap_remove(0)
    }

    /// The `DIM − 1` non-principal ("unreal") components, in basis order
    fn unreal(&self) -> Vec<Self::Real> {
        let mut out = self.parts();
        out.remove(0);
        out
    }
}
