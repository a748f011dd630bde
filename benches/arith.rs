//! Microbenchmarks for doubling arithmetic
//!
//! Tracks the cost of one multiplication per dimension and backend;
//! mostly useful for watching arbitrary-precision operand growth.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;

use hyperplex::{Octonion, Quaternion, Ring};

fn bench_mul(c: &mut Criterion) {
    let qf = Quaternion::<f64>::compose(&[1.5, -2.25, 3.0, 0.5]).unwrap();
    c.bench_function("quaternion_f64_mul", |b| {
        b.iter(|| black_box(&qf).mul(black_box(&qf)))
    });

    let of = Octonion::<f64>::compose(&[1.0, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0]).unwrap();
    c.bench_function("octonion_f64_mul", |b| {
        b.iter(|| black_box(&of).mul(black_box(&of)))
    });

    let qb =
        Quaternion::<BigInt>::compose(&[91, -72, 653, -4104].map(BigInt::from)).unwrap();
    c.bench_function("quaternion_bigint_mul", |b| {
        b.iter(|| black_box(&qb).mul(black_box(&qb)))
    });
}

fn bench_norm(c: &mut Criterion) {
    let of = Octonion::<f64>::compose(&[1.0, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0]).unwrap();
    c.bench_function("octonion_f64_norm", |b| b.iter(|| black_box(&of).norm()));
}

criterion_group!(benches, bench_mul, bench_norm);
criterion_main!(benches);
