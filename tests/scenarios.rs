//! Pinned end-to-end scenarios over the exact backends

use num_bigint::BigInt;
use num_rational::BigRational;

use hyperplex::diagnostics::associator;
use hyperplex::{Complex, Error, Inverse, Quaternion, Ring, Ultra};

fn gauss(re: i64, im: i64) -> Complex<BigInt> {
    Complex::new(BigInt::from(re), BigInt::from(im))
}

#[test]
fn complex_integer_norm() {
    // 3 + 4i has quadrance and norm 25; at dimension 2 the two coincide
    let z = gauss(3, 4);
    assert_eq!(z.quadrance(), BigInt::from(25));
    assert_eq!(z.norm(), BigInt::from(25));
}

#[test]
fn complex_integer_product() {
    // (1 + i)(1 − i) = 2, same in either order
    let x = gauss(1, 1);
    let y = gauss(1, -1);
    assert_eq!(x.mul(&y), gauss(2, 0));
    assert_eq!(y.mul(&x), gauss(2, 0));
}

#[test]
fn zero_is_the_only_complex_zero_divisor() {
    let zero = Complex::<BigRational>::zero();
    assert!(zero.is_zero_divisor());
    assert!(!Complex::<BigRational>::one().is_zero_divisor());
    assert_eq!(zero.try_inv(), Err(Error::ZeroInverse));
}

#[test]
fn quaternion_sign_flip() {
    // x = 1 + i, y = j: witnesses the i·j = k / j·i = −k pattern
    let x = Quaternion::<BigInt>::compose(&[1, 1, 0, 0].map(BigInt::from)).unwrap();
    let y = Quaternion::<BigInt>::compose(&[0, 0, 1, 0].map(BigInt::from)).unwrap();
    let xy = x.mul(&y);
    let yx = y.mul(&x);
    assert_ne!(xy, yx);
    // x·y = j + k, y·x = j − k
    assert_eq!(xy.parts(), [0, 0, 1, 1].map(BigInt::from).to_vec());
    assert_eq!(yx.parts(), [0, 0, 1, -1].map(BigInt::from).to_vec());
}

#[test]
fn parabolic_tower_breaks_associativity() {
    // the parabolic flavor associates while its component ring commutes,
    // so the witness lives one doubling above the supra numbers
    let w = Ultra::<BigInt>::compose(&[0, 0, 1, 0, 0, 0, 0, 0].map(BigInt::from)).unwrap();
    let x = Ultra::<BigInt>::compose(&[0, 1, 0, 0, 0, 0, 0, 0].map(BigInt::from)).unwrap();
    let y = Ultra::<BigInt>::compose(&[0, 0, 0, 0, 1, 0, 0, 0].map(BigInt::from)).unwrap();
    assert!(!associator(&w, &x, &y).is_zero());
}
