//! Error types for hyperplex operations

use thiserror::Error;

/// Result type alias for hyperplex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hyperplex operations
///
/// Every variant is a programmer-error-class failure: an algebraic
/// precondition was violated at the call site. Nothing is retried or
/// recovered internally, and no partial results are produced.
///
/// The `Zero*` variants are raised when the offending operand is literally
/// the additive identity; the `ZeroDivisor*` variants when it is a non-zero
/// zero divisor. The split exists for diagnostics only; callers should
/// treat both members of a pair the same way.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Inverse of the additive identity requested
    #[error("inverse of zero")]
    ZeroInverse,

    /// Quotient with the additive identity as divisor
    #[error("division by zero")]
    ZeroDenominator,

    /// Inverse of a non-zero zero divisor requested
    #[error("inverse of a zero divisor")]
    ZeroDivisorInverse,

    /// Quotient with a non-zero zero divisor as divisor
    #[error("division by a zero divisor")]
    ZeroDivisorDenominator,
}

impl Error {
    /// Reclassify an inverse failure as a denominator failure.
    ///
    /// Quotients and fractional-linear maps compute inverses internally;
    /// when those fail the caller supplied a bad divisor, not a bad inverse
    /// operand, and the message should say so.
    pub(crate) fn into_denominator(self) -> Error {
        match self {
            Error::ZeroInverse => Error::ZeroDenominator,
            Error::ZeroDivisorInverse => Error::ZeroDivisorDenominator,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denominator_reclassification() {
        assert_eq!(Error::ZeroInverse.into_denominator(), Error::ZeroDenominator);
        assert_eq!(
            Error::ZeroDivisorInverse.into_denominator(),
            Error::ZeroDivisorDenominator
        );
        assert_eq!(
            Error::ZeroDenominator.into_denominator(),
            Error::ZeroDenominator
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::ZeroInverse.to_string(), "inverse of zero");
        assert_eq!(
            Error::ZeroDivisorDenominator.to_string(),
            "division by a zero divisor"
        );
    }
}
