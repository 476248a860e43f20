//! Edge storage: exactly one of two representations is live at a time.

pub mod list;
pub mod matrix;

use serde::{Deserialize, Serialize};

use crate::edge::{Edge, Weight};
pub use list::{AdjacencyList, ListEdges};
pub use matrix::{AdjacencyMatrix, MatrixEdges};

/// Identifies which representation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    /// Sparse per-vertex neighbor sequences.
    #[default]
    List,
    /// Dense weight table.
    Matrix,
}

/// The live edge store of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    /// Adjacency-list form.
    List(AdjacencyList),
    /// Adjacency-matrix form.
    Matrix(AdjacencyMatrix),
}

impl Representation {
    /// Returns the active form.
    pub fn form(&self) -> Form {
        match self {
            Representation::List(_) => Form::List,
            Representation::Matrix(_) => Form::Matrix,
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        match self {
            Representation::List(list) => list.vertex_count(),
            Representation::Matrix(matrix) => matrix.vertex_count(),
        }
    }

    /// Replaces a list with the equivalent matrix.
    ///
    /// Returns `false` without touching anything if already in matrix form.
    pub fn to_matrix(&mut self) -> bool {
        let Representation::List(list) = self else {
            return false;
        };
        *self = Representation::Matrix(AdjacencyMatrix::from_list(list));
        true
    }

    /// Replaces a matrix with the equivalent list.
    ///
    /// Returns `false` without touching anything if already in list form.
    pub fn to_list(&mut self) -> bool {
        let Representation::Matrix(matrix) = self else {
            return false;
        };
        *self = Representation::List(AdjacencyList::from_matrix(matrix));
        true
    }

    /// Converts to the given form.
    pub fn convert(&mut self, form: Form) -> bool {
        match form {
            Form::List => self.to_list(),
            Form::Matrix => self.to_matrix(),
        }
    }

    /// Returns the weight of `source -> target`, if present.
    pub fn weight(&self, source: usize, target: usize) -> Option<Weight> {
        match self {
            Representation::List(list) => list.weight(source, target),
            Representation::Matrix(matrix) => matrix.weight(source, target),
        }
    }

    /// Returns the number of stored entries.
    pub fn entry_count(&self) -> usize {
        match self {
            Representation::List(list) => list.entry_count(),
            Representation::Matrix(matrix) => matrix.entry_count(),
        }
    }

    /// Returns an iterator over every stored entry.
    pub fn edges(&self) -> Edges<'_> {
        match self {
            Representation::List(list) => Edges::List(list.iter()),
            Representation::Matrix(matrix) => Edges::Matrix(matrix.iter()),
        }
    }

    /// Stores a single directed entry. Ids must be in range.
    pub(crate) fn insert(&mut self, source: usize, target: usize, weight: Weight) {
        match self {
            Representation::List(list) => list.push(source, target, weight),
            Representation::Matrix(matrix) => matrix.set(source, target, weight),
        }
    }

    /// Clears a single directed entry. Ids must be in range.
    pub(crate) fn remove(&mut self, source: usize, target: usize) {
        match self {
            Representation::List(list) => list.remove(source, target),
            Representation::Matrix(matrix) => matrix.set(source, target, 0),
        }
    }

    /// Appends a vertex, switching to list form first.
    pub(crate) fn push_vertex(&mut self) -> usize {
        self.to_list();
        if let Representation::List(list) = self {
            list.push_vertex();
        }
        self.vertex_count()
    }

    /// Removes a vertex, switching to list form first. The id must be in range.
    pub(crate) fn remove_vertex(&mut self, vertex: usize) {
        self.to_list();
        if let Representation::List(list) = self {
            list.remove_vertex(vertex);
        }
    }
}

/// Iterator over the entries of a [`Representation`].
pub enum Edges<'a> {
    /// Entries of a list, in row and insertion order.
    List(ListEdges<'a>),
    /// Non-zero cells of a matrix, in row-major order.
    Matrix(MatrixEdges<'a>),
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Edges::List(inner) => inner.next(),
            Edges::Matrix(inner) => inner.next(),
        }
    }
}
