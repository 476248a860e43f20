//! Integration traits for external graph algorithm libraries.

use crate::Edge;
use crate::graph::Graph;
use crate::storage::Edges;

/// Trait for edge sources consumable by graph algorithm libraries.
///
/// This crate does not ship traversal or search; implementors hand their
/// stored entries to a library that does.
pub trait EdgeSource {
    /// Iterator type over edges
    type Iter<'a>: Iterator<Item = Edge>
    where
        Self: 'a;

    /// Returns an iterator over all stored edges.
    fn iter_edges(&self) -> Self::Iter<'_>;

    /// Returns the number of vertices edges may refer to.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns true if empty.
    fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }
}

impl EdgeSource for Graph {
    type Iter<'a> = Edges<'a>;

    fn iter_edges(&self) -> Self::Iter<'_> {
        self.edges()
    }

    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }
}
