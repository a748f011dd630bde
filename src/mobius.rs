//! Fractional-linear combinators
//!
//! Möbius transforms and cross-ratios, built from the ring operations and
//! one or two inverses. Multiplication order matters in non-commutative
//! systems, so each combinator comes in a left and a right variant; in
//! commutative systems the pair coincides.
//!
//! Defined wherever [`Inverse`](crate::inverse::Inverse) is defined, i.e.
//! not over integer backends and not for parabolic towers.

use crate::error::{Error, Result};
use crate::inverse::Inverse;
use crate::ring::Ring;

/// Right Möbius transform `(a·z + b) · (c·z + d)⁻¹`.
///
/// # Errors
///
/// `ZeroDenominator`/`ZeroDivisorDenominator` when `c·z + d` has no
/// inverse.
pub fn mobius_r<R: Inverse>(z: &R, a: &R, b: &R, c: &R, d: &R) -> Result<R> {
    let den = c.mul(z).add(d);
    let di = den.try_inv().map_err(Error::into_denominator)?;
    Ok(a.mul(z).add(b).mul(&di))
}

/// Left Möbius transform `(c·z + d)⁻¹ · (a·z + b)`.
///
/// # Errors
///
/// `ZeroDenominator`/`ZeroDivisorDenominator` when `c·z + d` has no
/// inverse.
pub fn mobius_l<R: Inverse>(z: &R, a: &R, b: &R, c: &R, d: &R) -> Result<R> {
    let den = c.mul(z).add(d);
    let di = den.try_inv().map_err(Error::into_denominator)?;
    Ok(di.mul(&a.mul(z).add(b)))
}

/// Right cross-ratio `((w−y)·(x−y)⁻¹) · ((x−z)·(w−z)⁻¹)`.
///
/// # Errors
///
/// `ZeroDenominator`/`ZeroDivisorDenominator` when either difference used
/// as a divisor has no inverse.
pub fn cross_ratio_r<R: Inverse>(w: &R, x: &R, y: &R, z: &R) -> Result<R> {
    let first = w.sub(y).quo_r(&x.sub(y))?;
    let second = x.sub(z).quo_r(&w.sub(z))?;
    Ok(first.mul(&second))
}

/// Left cross-ratio `((w−z)⁻¹·(x−z)) · ((x−y)⁻¹·(w−y))`.
///
/// # Errors
///
/// `ZeroDenominator`/`ZeroDivisorDenominator` when either difference used
/// as a divisor has no inverse.
pub fn cross_ratio_l<R: Inverse>(w: &R, x: &R, y: &R, z: &R) -> Result<R> {
    let first = x.sub(z).quo_l(&w.sub(z))?;
    let second = w.sub(y).quo_l(&x.sub(y))?;
    Ok(first.mul(&second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    use crate::double::Double;
    use crate::flavor::Elliptic;
    use crate::ring::Ring;

    type Cx = Double<BigRational, Elliptic>;

    fn re(n: i64) -> Cx {
        Cx::new(
            BigRational::new(BigInt::from(n), BigInt::from(1)),
            <BigRational as Ring>::zero(),
        )
    }

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_cross_ratio_of_real_points() {
        // ((0−2)/(1−2)) · ((1−3)/(0−3)) = 2 · 2/3 = 4/3
        let got = cross_ratio_r(&re(0), &re(1), &re(2), &re(3)).unwrap();
        assert_eq!(got, Cx::new(rat(4, 3), rat(0, 1)));
        // commutative system: both variants agree
        let left = cross_ratio_l(&re(0), &re(1), &re(2), &re(3)).unwrap();
        assert_eq!(left, got);
    }

    #[test]
    fn test_mobius_identity_map() {
        // a = d = 1, b = c = 0 is the identity transform
        let z = Cx::new(rat(3, 7), rat(-2, 5));
        let got = mobius_r(&z, &Cx::one(), &Cx::zero(), &Cx::zero(), &Cx::one()).unwrap();
        assert_eq!(got, z);
        let got = mobius_l(&z, &Cx::one(), &Cx::zero(), &Cx::zero(), &Cx::one()).unwrap();
        assert_eq!(got, z);
    }

    #[test]
    fn test_mobius_inversion_map() {
        // a = d = 0, b = c = 1 sends z to z⁻¹
        let z = Cx::new(rat(3, 1), rat(4, 1));
        let got = mobius_r(&z, &Cx::zero(), &Cx::one(), &Cx::one(), &Cx::zero()).unwrap();
        assert_eq!(got, z.try_inv().unwrap());
    }

    #[test]
    fn test_mobius_pole_is_a_denominator_error() {
        let z = re(2);
        // c·z + d = z − 2 vanishes at z = 2
        let err = mobius_r(&z, &Cx::one(), &Cx::zero(), &Cx::one(), &re(-2));
        assert_eq!(err, Err(Error::ZeroDenominator));
    }
}
