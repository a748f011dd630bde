//! Commutator and associator
//!
//! Diagnostic operators exposing how far a system is from commutative or
//! associative. Both are ordinary total operations; the interesting content
//! is in which systems force them to zero (see the law suite in `tests/`).

use crate::ring::Ring;

/// `x·y − y·x`.
///
/// The additive identity for all operands exactly in the commutative
/// systems (plexified towers, dimension-2 systems over a plain scalar).
pub fn commutator<R: Ring>(x: &R, y: &R) -> R {
    x.mul(y).sub(&y.mul(x))
}

/// `(w·x)·y − w·(x·y)`.
///
/// The additive identity for all operands exactly in the associative
/// systems; a generically non-zero witness in octonion-like and deep
/// parabolic towers (occasionally zero by coincidence, so treat a single
/// zero as inconclusive).
pub fn associator<R: Ring>(w: &R, x: &R, y: &R) -> R {
    w.mul(x).mul(y).sub(&w.mul(&x.mul(y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::double::Double;
    use crate::flavor::Elliptic;
    use crate::ring::Ring;

    type Cx = Double<i64, Elliptic>;
    type Quat = Double<Cx, Elliptic>;
    type Oct = Double<Quat, Elliptic>;

    fn basis<R: Ring>(i: usize) -> R {
        let mut parts = vec![R::Real::zero(); R::DIM];
        parts[i] = R::Real::one();
        R::compose(&parts).unwrap()
    }

    #[test]
    fn test_complex_commutator_vanishes() {
        let x = Cx::new(3, -1);
        let y = Cx::new(2, 5);
        assert!(commutator(&x, &y).is_zero());
    }

    #[test]
    fn test_quaternion_commutator_witness() {
        // [i, j] = 2k
        let i: Quat = basis(1);
        let j: Quat = basis(2);
        let k: Quat = basis(3);
        assert_eq!(commutator(&i, &j), k.scale(&2));
    }

    #[test]
    fn test_quaternion_associator_vanishes() {
        let w = Quat::compose(&[1, -2, 3, -4]).unwrap();
        let x = Quat::compose(&[0, 5, 1, 2]).unwrap();
        let y = Quat::compose(&[7, 0, -3, 1]).unwrap();
        assert!(associator(&w, &x, &y).is_zero());
    }

    #[test]
    fn test_octonion_associator_witness() {
        // (e1·e2)·e4 = e7 while e1·(e2·e4) = −e7
        let e1: Oct = basis(1);
        let e2: Oct = basis(2);
        let e4: Oct = basis(4);
        let e7: Oct = basis(7);
        assert_eq!(e1.mul(&e2).mul(&e4), e7);
        assert_eq!(e1.mul(&e2.mul(&e4)), e7.neg());
        assert_eq!(associator(&e1, &e2, &e4), e7.scale(&2));
    }
}
