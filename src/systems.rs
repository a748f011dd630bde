//! The named number systems
//!
//! Every system here is a type alias of the engine: fixed doublings of a
//! scalar backend `S`, no per-system arithmetic anywhere. The aliases encode
//! the construction table:
//!
//! | Dimension | Alias                 | Construction                  |
//! |-----------|-----------------------|-------------------------------|
//! | 2         | [`Complex`]           | elliptic over `S`             |
//! | 2         | [`Perplex`]           | hyperbolic over `S`           |
//! | 2         | [`Dual`]              | parabolic over `S`            |
//! | 4         | [`Quaternion`]        | elliptic over `Complex`       |
//! | 4         | [`SplitQuaternion`]   | hyperbolic over `Complex`     |
//! | 4         | [`Supra`]             | parabolic over `Dual`         |
//! | 4         | [`HyperDual`]         | plexification over `Dual`     |
//! | 4         | [`Bicomplex`]         | plexification over `Complex`  |
//! | 8         | [`Octonion`]          | elliptic over `Quaternion`    |
//! | 8         | [`SplitOctonion`]     | hyperbolic over `Quaternion`  |
//! | 8         | [`Ultra`]             | parabolic over `Supra`        |
//! | 8         | [`TriDual`]           | plexification over `HyperDual`|
//!
//! Character of each family: elliptic towers lose commutativity at
//! dimension 4 and associativity at 8; hyperbolic towers carry zero
//! divisors from dimension 2 up; parabolic towers are nilpotent,
//! non-commutative from dimension 4 (the conjugate twist in their unreal
//! part) and non-associative from dimension 8; plexified towers stay
//! commutative and associative at every dimension but are never
//! division rings.

use crate::double::Double;
use crate::flavor::{Elliptic, Hyperbolic, Parabolic, Plexification};

/// Complex numbers over `S`: `i² = −1`
pub type Complex<S> = Double<S, Elliptic>;

/// Split-complex (perplex) numbers over `S`: `s² = +1`
pub type Perplex<S> = Double<S, Hyperbolic>;

/// Dual numbers over `S`: `ε² = 0`
pub type Dual<S> = Double<S, Parabolic>;

/// Hamilton quaternions over `S`
pub type Quaternion<S> = Double<Complex<S>, Elliptic>;

/// Split (Cockle) quaternions over `S`
pub type SplitQuaternion<S> = Double<Complex<S>, Hyperbolic>;

/// Supra numbers: the parabolic doubling of the dual numbers
pub type Supra<S> = Double<Dual<S>, Parabolic>;

/// Hyper-dual numbers: two independent commuting nilpotent units
pub type HyperDual<S> = Double<Dual<S>, Plexification>;

/// Bicomplex-style numbers: a nilpotent unit adjoined to `Complex<S>`
pub type Bicomplex<S> = Double<Complex<S>, Plexification>;

/// Graves-Cayley octonions over `S`
pub type Octonion<S> = Double<Quaternion<S>, Elliptic>;

/// Split octonions over `S`
pub type SplitOctonion<S> = Double<Quaternion<S>, Hyperbolic>;

/// Ultra numbers: the parabolic doubling of the supra numbers, the first
/// parabolic level with a non-vanishing associator
pub type Ultra<S> = Double<Supra<S>, Parabolic>;

/// Tri-dual numbers: three independent commuting nilpotent units
pub type TriDual<S> = Double<HyperDual<S>, Plexification>;
