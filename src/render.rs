//! Text dumps of the active representation.
//!
//! ```text
//! Adjacency Matrix (V=3):        Adjacency List (V=3):
//!      1  2  3                   [1] -> 2(w:5)
//!  1|  0  5  0                   [2]
//!  2|  0  0  0                   [3] -> 1(w:2) -> 2(w:1)
//!  3|  2  1  0
//! ```

use std::fmt;

use crate::graph::Graph;
use crate::storage::{AdjacencyList, AdjacencyMatrix, Representation};

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();
        writeln!(f, "Adjacency Matrix (V={n}):")?;
        write!(f, "   ")?;
        for j in 1..=n {
            write!(f, "{j:>3}")?;
        }
        writeln!(f)?;
        for i in 1..=n {
            write!(f, "{i:>2}|")?;
            for w in self.row(i) {
                write!(f, "{w:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency List (V={}):", self.vertex_count())?;
        for i in 1..=self.vertex_count() {
            write!(f, "[{i}]")?;
            for n in self.neighbors(i) {
                write!(f, " -> {}(w:{})", n.vertex, n.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::List(list) => fmt::Display::fmt(list, f),
            Representation::Matrix(matrix) => fmt::Display::fmt(matrix, f),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.representation(), f)
    }
}

impl Graph {
    /// Renders the active representation as text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
