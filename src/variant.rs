//! Directed and undirected edge semantics.

use serde::{Deserialize, Serialize};

/// Fixed directedness of a graph.
///
/// The variant decides how one edge call fans out over stored entries and
/// which vertex pairs random generation considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Edges are one-way; `(u, v)` and `(v, u)` are independent.
    Directed,
    /// Every edge is stored in both directions with the same weight.
    Undirected,
}

impl Variant {
    /// Returns `true` if an edge call also writes the reverse direction.
    pub fn is_symmetric(self) -> bool {
        matches!(self, Variant::Undirected)
    }

    /// Returns the directed entries touched by an edge call on `(u, v)`.
    ///
    /// The first entry is always `(u, v)`.
    pub fn entries(self, u: usize, v: usize) -> impl Iterator<Item = (usize, usize)> {
        let mirror = self.is_symmetric().then_some((v, u));
        std::iter::once((u, v)).chain(mirror)
    }

    /// Returns the vertex pairs random generation visits for `vertex_count` vertices.
    pub fn candidate_pairs(self, vertex_count: usize) -> CandidatePairs {
        CandidatePairs {
            variant: self,
            vertex_count,
            i: 1,
            j: self.first_column(1),
        }
    }

    /// Upper triangle for undirected graphs, everything off the diagonal otherwise.
    fn first_column(self, row: usize) -> usize {
        match self {
            Variant::Directed => 1,
            Variant::Undirected => row + 1,
        }
    }

    fn skips(self, i: usize, j: usize) -> bool {
        matches!(self, Variant::Directed) && i == j
    }
}

/// Iterator over the `(i, j)` pairs considered during random generation, in
/// row-major order.
///
/// Undirected graphs yield each unordered pair once with `i < j`; directed
/// graphs yield every ordered pair with `i != j`.
#[derive(Debug, Clone)]
pub struct CandidatePairs {
    variant: Variant,
    vertex_count: usize,
    i: usize,
    j: usize,
}

impl Iterator for CandidatePairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i <= self.vertex_count {
            if self.j > self.vertex_count {
                self.i += 1;
                self.j = self.variant.first_column(self.i);
                continue;
            }
            let pair = (self.i, self.j);
            self.j += 1;
            if !self.variant.skips(pair.0, pair.1) {
                return Some(pair);
            }
        }
        None
    }
}
