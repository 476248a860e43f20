//! Edge and neighbor value types.

use serde::{Deserialize, Serialize};

/// Integer edge weight.
///
/// In matrix form a weight of `0` is read back as "no edge".
pub type Weight = i32;

/// Weight used by [`Graph::add_edge_default`](crate::Graph::add_edge_default).
pub const DEFAULT_WEIGHT: Weight = 1;

/// A stored edge, as reported by iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex id (1-based)
    pub source: usize,
    /// Target vertex id (1-based)
    pub target: usize,
    /// Edge weight
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge
    pub fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// One entry of a vertex's adjacency sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// Neighbor vertex id (1-based)
    pub vertex: usize,
    /// Weight of the edge towards `vertex`
    pub weight: Weight,
}

impl Neighbor {
    /// Creates a new neighbor entry
    pub fn new(vertex: usize, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}
