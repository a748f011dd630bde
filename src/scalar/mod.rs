//! Base scalar backends
//!
//! Five interchangeable representations of the base real line, each
//! implementing [`Ring`](crate::ring::Ring) with itself as both `Real` and
//! `Quad`:
//!
//! | Module       | Type                         | Exact? | Division closes? |
//! |--------------|------------------------------|--------|------------------|
//! | [`int`]      | `i64`                        | yes    | no (truncating)  |
//! | [`float`]    | `f64`                        | no     | yes (IEEE-754)   |
//! | [`bigint`]   | `num_bigint::BigInt`         | yes    | no (truncating)  |
//! | [`rational`] | `num_rational::BigRational`  | yes    | yes              |
//! | [`mpfloat`]  | [`mpfloat::Mpf`]             | no     | yes (rounded)    |
//!
//! The backends whose division closes additionally implement
//! [`Inverse`](crate::inverse::Inverse); towers built over the integer
//! backends consequently have no inverse or quotient operations at any
//! dimension, which mirrors the fact that division does not close over them.
//!
//! Algebraic identities proven for the exact backends hold only up to
//! rounding for the float backends, and NaN/∞ propagate silently through
//! every doubling formula per IEEE-754.

pub mod bigint;
pub mod float;
pub mod int;
pub mod mpfloat;
pub mod rational;

pub use mpfloat::Mpf;

use crate::ring::Ring;

/// A base real scalar: a dimension-1, self-conjugate [`Ring`].
///
/// The two extra members exist for rendering and for magnitude reasoning in
/// tests; they are not consumed by the doubling engine itself.
pub trait Scalar: Ring<Real = Self, Quad = Self> {
    /// True iff the value is strictly below the additive identity
    fn is_negative(&self) -> bool;

    /// Absolute value
    fn abs(&self) -> Self;
}
