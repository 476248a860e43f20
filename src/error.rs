//! Error types.

use std::fmt;

use crate::Weight;

/// Errors returned when graph parameters are rejected.
///
/// Out-of-range vertex ids passed to edge or vertex operations are not errors;
/// those calls are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The edge probability was NaN or outside `[0, 1]`.
    InvalidProbability(f64),
    /// The lower weight bound was greater than the upper bound.
    InvalidWeightRange {
        /// Lower bound as given.
        min: Weight,
        /// Upper bound as given.
        max: Weight,
    },
    /// A graph was requested with no vertices.
    EmptyGraph,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidProbability(p) => {
                write!(f, "edge probability {p} is outside [0, 1]")
            }
            GraphError::InvalidWeightRange { min, max } => {
                write!(f, "weight range [{min}, {max}] is empty")
            }
            GraphError::EmptyGraph => write!(f, "graph must have at least one vertex"),
        }
    }
}

impl std::error::Error for GraphError {}
