//! Dense adjacency-matrix storage.

use crate::edge::{Edge, Weight};
use crate::storage::list::AdjacencyList;

/// Square table of weights indexed by `(source, target)`, 1-based.
///
/// A cell holding `0` means "no edge", so a zero-weight edge cannot be told
/// apart from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    // Row-major, `size * size` cells.
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Creates an all-zero matrix for `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            size: vertex_count,
            cells: vec![0; vertex_count * vertex_count],
        }
    }

    /// Builds a matrix from a list.
    ///
    /// Entries are written in list order, so when a pair appears more than
    /// once the last entry wins.
    pub fn from_list(list: &AdjacencyList) -> Self {
        let mut matrix = Self::new(list.vertex_count());
        for edge in list {
            matrix.set(edge.source, edge.target, edge.weight);
        }
        matrix
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.size
    }

    /// Returns the raw cell value, `0` for absent edges and unknown ids.
    pub fn get(&self, source: usize, target: usize) -> Weight {
        self.index(source, target).map_or(0, |i| self.cells[i])
    }

    /// Returns the weight of `source -> target` if the cell is non-zero.
    pub fn weight(&self, source: usize, target: usize) -> Option<Weight> {
        match self.get(source, target) {
            0 => None,
            w => Some(w),
        }
    }

    /// Returns one row of the matrix.
    pub fn row(&self, source: usize) -> &[Weight] {
        match source {
            s if (1..=self.size).contains(&s) => &self.cells[(s - 1) * self.size..s * self.size],
            _ => &[],
        }
    }

    /// Returns the number of non-zero cells.
    pub fn entry_count(&self) -> usize {
        self.cells.iter().filter(|&&w| w != 0).count()
    }

    /// Returns an iterator over the non-zero cells in row-major order.
    pub fn iter(&self) -> MatrixEdges<'_> {
        MatrixEdges {
            matrix: self,
            pos: 0,
        }
    }

    pub(crate) fn set(&mut self, source: usize, target: usize, weight: Weight) {
        if let Some(i) = self.index(source, target) {
            self.cells[i] = weight;
        }
    }

    fn index(&self, source: usize, target: usize) -> Option<usize> {
        let in_range = |v: usize| v >= 1 && v <= self.size;
        (in_range(source) && in_range(target)).then(|| (source - 1) * self.size + (target - 1))
    }
}

impl<'a> IntoIterator for &'a AdjacencyMatrix {
    type Item = Edge;
    type IntoIter = MatrixEdges<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the non-zero cells of an [`AdjacencyMatrix`].
pub struct MatrixEdges<'a> {
    matrix: &'a AdjacencyMatrix,
    pos: usize,
}

impl Iterator for MatrixEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.matrix.size;
        while let Some(&weight) = self.matrix.cells.get(self.pos) {
            let pos = self.pos;
            self.pos += 1;
            if weight != 0 {
                return Some(Edge::new(pos / size + 1, pos % size + 1, weight));
            }
        }
        None
    }
}
