//! Error types for cubature construction and evaluation.
//!
//! All errors are programming-contract violations: they are raised
//! synchronously at the point of the violated contract and carry no retry
//! semantics. There is no degraded mode; a shape or dimension violation never
//! produces a truncated or zero-padded result.

use thiserror::Error;

/// Errors that can occur while generating orbits, assembling schemes, or
/// integrating over a domain instance.
#[derive(Debug, Error)]
pub enum CubatureError {
    /// An orbit generator was asked to place more nonzero coordinates than
    /// the dimension permits.
    #[error("cannot place {placed} nonzero coordinates in dimension {dim}")]
    InvalidMultiplicity {
        /// Number of coordinates the generator was asked to place
        placed: usize,
        /// Ambient dimension
        dim: usize,
    },

    /// Structurally inconsistent arrays: orbit pairs with mismatched widths,
    /// wrong corner counts, or integrand output not matching the node count.
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Where the mismatch was detected
        context: String,
        /// What the contract requires
        expected: String,
        /// What was actually supplied
        got: String,
    },

    /// A concrete domain instance collapses (zero radius, vanishing Jacobian).
    #[error("degenerate domain instance: {reason}")]
    DegenerateDomainInstance {
        /// Description of the collapse
        reason: String,
    },

    /// Exact coefficients were requested from a scheme that was constructed
    /// in floating point only.
    #[error("scheme '{name}' carries no exact coefficients")]
    UnsupportedPrecisionCast {
        /// Name of the offending scheme
        name: String,
    },
}

/// A specialized `Result` type for cubature operations.
pub type Result<T> = std::result::Result<T, CubatureError>;

impl CubatureError {
    pub(crate) fn shape(
        context: impl Into<String>,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        CubatureError::ShapeMismatch {
            context: context.into(),
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Returns `true` if this is a structural (shape or multiplicity) error.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            CubatureError::InvalidMultiplicity { .. } | CubatureError::ShapeMismatch { .. }
        )
    }
}
