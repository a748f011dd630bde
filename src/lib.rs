//! # Hyperplex
//!
//! Hypercomplex number arithmetic by recursive Cayley-Dickson-style
//! doubling. Starting from a base scalar ring, each higher-dimensional
//! system is an ordered pair of elements of the system below it, with
//! multiplication, conjugation and quadrance fixed by a doubling flavor.
//!
//! ## Architecture
//!
//! ```text
//! scalar backend (i64 | f64 | BigInt | BigRational | Mpf)
//!     ↓ Double<_, Flavor>            dimension 2  (complex / perplex / dual)
//! Double<Double<_, _>, Flavor>       dimension 4  (quaternion, bicomplex, ...)
//!     ↓ one more doubling            dimension 8  (octonion, ultra, ...)
//! ```
//!
//! One generic engine ([`Double`]) parameterized by a component ring
//! ([`Ring`]) and a flavor ([`flavor`]) replaces the per-system,
//! per-backend copies a hand-written tower would need. Dimension and flavor
//! are compile-time choices; there is no runtime genericity over either.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hyperplex::{Quaternion, Ring, Inverse};
//!
//! let q = Quaternion::<f64>::compose(&[1.0, 2.0, 2.0, 4.0]).unwrap();
//! assert_eq!(q.norm(), 625.0);
//! let qi = q.try_inv()?;
//! ```
//!
//! Inverses and quotients exist only where the mathematics provides them:
//! integer-backed towers and deep parabolic towers expose no `Inverse` at
//! all, and calling it on a zero divisor elsewhere is an [`Error`], never a
//! wrong answer.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Public modules
pub mod diagnostics;
pub mod double;
pub mod flavor;
pub mod inverse;
pub mod mobius;
pub mod render;
pub mod ring;
pub mod sample;
pub mod scalar;
pub mod systems;

// Internal modules
mod error;

// Re-exports
pub use error::{Error, Result};

pub use double::Double;
pub use inverse::Inverse;
pub use ring::Ring;
pub use scalar::{Mpf, Scalar};
pub use systems::{
    Bicomplex, Complex, Dual, HyperDual, Octonion, Perplex, Quaternion, SplitOctonion,
    SplitQuaternion, Supra, TriDual, Ultra,
};
