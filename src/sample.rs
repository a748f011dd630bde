//! Deterministic sample generation
//!
//! A SplitMix64 PRNG plus a [`Sample`] trait producing arbitrary
//! finite-magnitude values of every backend and every composite system.
//! This is a test-data source, not a statistics tool: the only contract is
//! "structurally valid value, magnitude bounded by the argument,
//! reproducible by seed". Property suites that want shrinking use proptest
//! instead; this sampler covers the backends proptest has no strategies
//! for.
//!
//! # Reference
//!
//! Steele, Guy L., Doug Lea, and Christine H. Flood. "Fast splittable
//! pseudorandom number generators." ACM SIGPLAN Notices 49.10 (2014):
//! 453-472.

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::double::Double;
use crate::flavor::Flavor;
use crate::ring::Ring;
use crate::scalar::Mpf;

/// SplitMix64 PRNG state
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a new SplitMix64 PRNG seeded with the given value
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate the next u64 value
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Generate a uniformly distributed f64 in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        let mantissa = self.next_u64() >> 11;
        (mantissa as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate an i64 in [−bound, bound]; bounds above `i64::MAX` are
    /// clamped to it
    pub fn next_i64(&mut self, bound: u64) -> i64 {
        let bound = bound.min(i64::MAX as u64);
        let span = 2 * bound + 1;
        ((self.next_u64() % span) as i128 - bound as i128) as i64
    }
}

/// Types that can produce an arbitrary bounded sample of themselves
pub trait Sample: Ring {
    /// Produce a value with every base-scalar component in `[−bound, bound]`.
    ///
    /// Integer-valued backends clamp `bound` to `i64::MAX` (see
    /// [`SplitMix64::next_i64`]).
    fn sample(rng: &mut SplitMix64, bound: u64) -> Self;
}

impl Sample for i64 {
    fn sample(rng: &mut SplitMix64, bound: u64) -> Self {
        rng.next_i64(bound)
    }
}

impl Sample for f64 {
    fn sample(rng: &mut SplitMix64, bound: u64) -> Self {
        (rng.next_f64() * 2.0 - 1.0) * bound as f64
    }
}

impl Sample for BigInt {
    fn sample(rng: &mut SplitMix64, bound: u64) -> Self {
        BigInt::from(rng.next_i64(bound))
    }
}

impl Sample for BigRational {
    fn sample(rng: &mut SplitMix64, bound: u64) -> Self {
        let numer = BigInt::from(rng.next_i64(bound));
        // non-zero denominator in [1, bound + 1]
        let denom = BigInt::from(rng.next_u64() % bound.saturating_add(1) + 1);
        BigRational::new(numer, denom)
    }
}

impl Sample for Mpf {
    fn sample(rng: &mut SplitMix64, bound: u64) -> Self {
        Mpf::from_f64((rng.next_f64() * 2.0 - 1.0) * bound as f64)
    }
}

impl<C, F> Sample for Double<C, F>
where
    C: Sample,
    F: Flavor,
{
    fn sample(rng: &mut SplitMix64, bound: u64) -> Self {
        let l = C::sample(rng, bound);
        let r = C::sample(rng, bound);
        Double::new(l, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Scalar;
    use crate::systems::Quaternion;

    #[test]
    fn test_splitmix64_deterministic() {
        let mut rng1 = SplitMix64::new(42);
        let mut rng2 = SplitMix64::new(42);
        for _ in 0..1000 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_next_i64_respects_bound() {
        let mut rng = SplitMix64::new(7);
        for _ in 0..1000 {
            let v = rng.next_i64(50);
            assert!((-50..=50).contains(&v));
        }
    }

    #[test]
    fn test_next_i64_clamps_oversized_bound() {
        let mut rng = SplitMix64::new(13);
        for _ in 0..1000 {
            let v = rng.next_i64(u64::MAX);
            assert!(v >= -i64::MAX);
        }
    }

    #[test]
    fn test_composite_samples_are_reproducible() {
        let a = Quaternion::<i64>::sample(&mut SplitMix64::new(9), 100);
        let b = Quaternion::<i64>::sample(&mut SplitMix64::new(9), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rational_sample_in_range() {
        let mut rng = SplitMix64::new(3);
        for _ in 0..200 {
            let q = BigRational::sample(&mut rng, 20);
            assert!(Scalar::abs(&q) <= BigRational::from_integer(20.into()));
        }
    }
}
