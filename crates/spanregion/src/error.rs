//! Caller contract violations.
//!
//! Degenerate geometry is never an error (it maps to `Empty`, a lower
//! dimensional fallback or `FullDomain`). Only malformed input lands here.

use std::fmt;

use crate::types::VectorId;

/// Errors surfaced by `compute_region` and the domain constructors.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionError {
    /// Domain bounds are non-finite or have non-positive extent.
    InvalidDomain { reason: String },
    /// A vector carries a NaN or infinite coordinate.
    NonFiniteCoordinate { id: VectorId },
    /// A vector's dimension does not match the domain (2 vs 3).
    DimensionMismatch {
        id: VectorId,
        expected: usize,
        found: usize,
    },
    /// Mode name not in `{linear, affine, convex, cone, hyperplane}`.
    UnknownMode(String),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::InvalidDomain { reason } => write!(f, "invalid domain: {reason}"),
            RegionError::NonFiniteCoordinate { id } => {
                write!(f, "vector {id} has a non-finite coordinate")
            }
            RegionError::DimensionMismatch {
                id,
                expected,
                found,
            } => write!(
                f,
                "vector {id} has {found} coordinates but the domain is {expected}-dimensional"
            ),
            RegionError::UnknownMode(name) => write!(
                f,
                "unknown combination mode {name:?} (expected linear|affine|convex|cone|hyperplane)"
            ),
        }
    }
}

impl std::error::Error for RegionError {}
