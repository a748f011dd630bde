//! Canonical string rendering
//!
//! Cosmetic, deterministic formatting of values as `a+b·u1−c·u2…`. Unit
//! symbols travel in an explicit [`UnitNames`] configuration object passed
//! by the caller, never process-wide state, so concurrent tests and
//! embedders cannot interfere with each other's output.
//!
//! Rendering consumes only the decomposition surface of
//! [`Ring`](crate::ring::Ring); nothing algebraic depends on it.

use crate::ring::Ring;
use crate::scalar::Scalar;

/// Unit symbols for the non-principal axes of one system.
///
/// Holds `DIM − 1` symbols in basis order. Presets exist for the named
/// systems; [`UnitNames::generic`] falls back to `e1…eN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitNames {
    units: Vec<String>,
}

impl UnitNames {
    /// Custom symbols, one per non-principal axis in basis order
    pub fn new<S: Into<String>>(units: Vec<S>) -> Self {
        Self {
            units: units.into_iter().map(Into::into).collect(),
        }
    }

    /// Generic `e1…eN` symbols for a system of dimension `dim`
    pub fn generic(dim: usize) -> Self {
        Self {
            units: (1..dim).map(|i| format!("e{i}")).collect(),
        }
    }

    /// `i`
    pub fn complex() -> Self {
        Self::new(vec!["i"])
    }

    /// `s` (the hyperbolic unit, `s² = +1`)
    pub fn perplex() -> Self {
        Self::new(vec!["s"])
    }

    /// `ε` (the nilpotent unit, `ε² = 0`)
    pub fn dual() -> Self {
        Self::new(vec!["ε"])
    }

    /// `i`, `j`, `k`
    pub fn quaternion() -> Self {
        Self::new(vec!["i", "j", "k"])
    }

    /// `i`, `t`, `u` (split-quaternion axes; `t² = u² = +1`)
    pub fn split_quaternion() -> Self {
        Self::new(vec!["i", "t", "u"])
    }

    /// `i`, `u`, `iu` (bicomplex axes; `u` nilpotent over ℂ)
    pub fn bicomplex() -> Self {
        Self::new(vec!["i", "u", "iu"])
    }

    /// `ε₁`, `ε₂`, `ε₁ε₂` (hyper-dual axes)
    pub fn hyper_dual() -> Self {
        Self::new(vec!["ε₁", "ε₂", "ε₁ε₂"])
    }

    /// `i`, `j`, `k`, `l`, `il`, `jl`, `kl`
    pub fn octonion() -> Self {
        Self::new(vec!["i", "j", "k", "l", "il", "jl", "kl"])
    }

    /// Symbol of the `i`-th non-principal axis (0-based), falling back to
    /// `e{i+1}` beyond the configured list
    pub fn unit(&self, i: usize) -> String {
        match self.units.get(i) {
            Some(u) => u.clone(),
            None => format!("e{}", i + 1),
        }
    }
}

/// Render `z` in the canonical `a+b·u1−c·u2…` form.
///
/// Every component appears, zero or not, so the output shape depends only
/// on the dimension: deterministic and diff-friendly.
pub fn render<R: Ring>(z: &R, names: &UnitNames) -> String {
    let parts = z.parts();
    let mut out = String::new();
    out.push_str(&parts[0].to_string());
    for (i, p) in parts.iter().enumerate().skip(1) {
        let sign = if p.is_negative() { '-' } else { '+' };
        out.push(sign);
        out.push_str(&Scalar::abs(p).to_string());
        out.push('·');
        out.push_str(&names.unit(i - 1));
    }
    out
}
