//! Sparse adjacency-list storage.

use crate::edge::{Edge, Neighbor, Weight};
use crate::storage::matrix::AdjacencyMatrix;

/// Per-vertex sequences of `(neighbor, weight)` entries.
///
/// Vertex ids are 1-based. Entries keep insertion order and may repeat a
/// neighbor; lookups treat the last entry for a neighbor as authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    rows: Vec<Vec<Neighbor>>,
}

impl AdjacencyList {
    /// Creates a list with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a list from a matrix, one entry per non-zero cell.
    ///
    /// Each row is filled in increasing column order.
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let n = matrix.vertex_count();
        let rows = (1..=n)
            .map(|i| {
                (1..=n)
                    .filter_map(|j| match matrix.get(i, j) {
                        0 => None,
                        w => Some(Neighbor::new(j, w)),
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total number of stored entries, duplicates included.
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns the entries of `vertex`, or an empty slice for an unknown id.
    pub fn neighbors(&self, vertex: usize) -> &[Neighbor] {
        vertex
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the weight of the last `source -> target` entry.
    pub fn weight(&self, source: usize, target: usize) -> Option<Weight> {
        self.neighbors(source)
            .iter()
            .rev()
            .find(|n| n.vertex == target)
            .map(|n| n.weight)
    }

    /// Returns an iterator over every stored entry in row order.
    pub fn iter(&self) -> ListEdges<'_> {
        ListEdges {
            rows: &self.rows,
            row: 0,
            col: 0,
        }
    }

    // Mutators below expect ids already checked against `vertex_count`.

    pub(crate) fn push(&mut self, source: usize, target: usize, weight: Weight) {
        self.rows[source - 1].push(Neighbor::new(target, weight));
    }

    pub(crate) fn remove(&mut self, source: usize, target: usize) {
        self.rows[source - 1].retain(|n| n.vertex != target);
    }

    pub(crate) fn push_vertex(&mut self) -> usize {
        self.rows.push(Vec::new());
        self.rows.len()
    }

    /// Drops `vertex` and closes the gap in the id range.
    pub(crate) fn remove_vertex(&mut self, vertex: usize) {
        self.rows.remove(vertex - 1);
        for row in &mut self.rows {
            row.retain(|n| n.vertex != vertex);
            for n in row.iter_mut().filter(|n| n.vertex > vertex) {
                n.vertex -= 1;
            }
        }
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = Edge;
    type IntoIter = ListEdges<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all entries of an [`AdjacencyList`].
pub struct ListEdges<'a> {
    rows: &'a [Vec<Neighbor>],
    row: usize,
    col: usize,
}

impl Iterator for ListEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entries) = self.rows.get(self.row) {
            if let Some(n) = entries.get(self.col) {
                self.col += 1;
                return Some(Edge::new(self.row + 1, n.vertex, n.weight));
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }
}
