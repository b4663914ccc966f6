//! Error type shared by the fallible statistics operations.
//!
//! Only genuinely undefined results are errors. The documented numeric
//! fallbacks (zero divisor, non-positive PMF sum, no non-zero elements)
//! return plain values instead.

/// Errors raised when a statistic is mathematically undefined for its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StatsError {
    /// The operation needs at least one element.
    #[error("{op}: input is empty")]
    EmptyInput {
        /// Name of the operation that rejected the input.
        op: &'static str,
    },

    /// A denominator built from standard deviations is zero.
    #[error("{op}: standard deviation is zero")]
    ZeroVariance {
        /// Name of the operation that rejected the input.
        op: &'static str,
    },

    /// A parallel sequence is shorter than the sequence it indexes.
    #[error("length mismatch: expected at least {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StatsError>;
