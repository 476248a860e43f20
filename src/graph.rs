//! Graph handle with switchable storage.

use crate::edge::{DEFAULT_WEIGHT, Weight};
use crate::storage::{AdjacencyList, AdjacencyMatrix, Edges, Form, Representation};
use crate::variant::Variant;

/// A weighted graph over vertices `1..=vertex_count`.
///
/// Edges live in either an adjacency list or an adjacency matrix; the
/// [`Variant`] chosen at construction decides whether each edge call writes
/// one or both directions.
///
/// Calls naming a vertex outside `1..=vertex_count` are ignored rather than
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    variant: Variant,
    storage: Representation,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices, stored as a list.
    pub fn new(vertex_count: usize, variant: Variant) -> Self {
        Self {
            variant,
            storage: Representation::List(AdjacencyList::new(vertex_count)),
        }
    }

    /// Creates a directed graph.
    pub fn directed(vertex_count: usize) -> Self {
        Self::new(vertex_count, Variant::Directed)
    }

    /// Creates an undirected graph.
    pub fn undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count, Variant::Undirected)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.storage.vertex_count()
    }

    /// Returns the edge semantics of this graph.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the active storage form.
    pub fn form(&self) -> Form {
        self.storage.form()
    }

    /// Returns `true` if edges are currently held in a matrix.
    pub fn is_matrix(&self) -> bool {
        self.form() == Form::Matrix
    }

    /// Returns the live storage.
    pub fn representation(&self) -> &Representation {
        &self.storage
    }

    /// Borrows the adjacency list, if that is the active form.
    pub fn list(&self) -> Option<&AdjacencyList> {
        match &self.storage {
            Representation::List(list) => Some(list),
            Representation::Matrix(_) => None,
        }
    }

    /// Borrows the adjacency matrix, if that is the active form.
    pub fn matrix(&self) -> Option<&AdjacencyMatrix> {
        match &self.storage {
            Representation::Matrix(matrix) => Some(matrix),
            Representation::List(_) => None,
        }
    }

    /// Returns `true` if `vertex` names an existing vertex.
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        (1..=self.vertex_count()).contains(&vertex)
    }

    /// Returns the stored weight of `source -> target`.
    ///
    /// In list form the last entry for the pair wins, matching what a
    /// conversion to matrix form would keep. In matrix form a `0` cell reads
    /// as `None`.
    pub fn weight(&self, source: usize, target: usize) -> Option<Weight> {
        self.storage.weight(source, target)
    }

    /// Returns `true` if an entry for `source -> target` is stored.
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.weight(source, target).is_some()
    }

    /// Returns an iterator over the stored entries in storage order.
    ///
    /// An undirected edge shows up once per direction.
    pub fn edges(&self) -> Edges<'_> {
        self.storage.edges()
    }

    /// Returns the number of stored entries.
    pub fn edge_count(&self) -> usize {
        self.storage.entry_count()
    }

    /// Switches to matrix form. Does nothing if already there.
    pub fn convert_to_matrix(&mut self) {
        self.convert_to(Form::Matrix);
    }

    /// Switches to list form. Does nothing if already there.
    pub fn convert_to_list(&mut self) {
        self.convert_to(Form::List);
    }

    /// Switches to the given form. Does nothing if already there.
    pub fn convert_to(&mut self, form: Form) {
        if self.storage.convert(form) {
            #[cfg(feature = "logging")]
            log::debug!("converted graph to {form:?} form (V={})", self.vertex_count());
        }
    }

    /// Appends a vertex and returns its id.
    ///
    /// The graph is switched to list form first.
    pub fn add_vertex(&mut self) -> usize {
        let id = self.storage.push_vertex();
        #[cfg(feature = "logging")]
        log::debug!("added vertex {id}");
        id
    }

    /// Removes `vertex` and every edge touching it.
    ///
    /// Vertices with a larger id shift down by one so ids stay contiguous.
    /// The graph is switched to list form first unless the id is out of
    /// range, in which case nothing happens.
    pub fn remove_vertex(&mut self, vertex: usize) {
        if !self.contains_vertex(vertex) {
            #[cfg(feature = "logging")]
            log::trace!("ignoring removal of unknown vertex {vertex}");
            return;
        }
        self.storage.remove_vertex(vertex);
        #[cfg(feature = "logging")]
        log::debug!("removed vertex {vertex}, V={}", self.vertex_count());
    }

    /// Adds an edge from `u` to `v`, and from `v` to `u` for undirected graphs.
    ///
    /// In list form a new entry is appended even if the pair already has one.
    /// In matrix form the cell is overwritten.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            #[cfg(feature = "logging")]
            log::trace!("ignoring edge ({u}, {v}): vertex out of range");
            return;
        }
        for (source, target) in self.variant.entries(u, v) {
            self.storage.insert(source, target, weight);
        }
    }

    /// Adds an edge with the default weight of 1.
    pub fn add_edge_default(&mut self, u: usize, v: usize) {
        self.add_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Removes every entry from `u` to `v`, and from `v` to `u` for undirected graphs.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            #[cfg(feature = "logging")]
            log::trace!("ignoring edge removal ({u}, {v}): vertex out of range");
            return;
        }
        for (source, target) in self.variant.entries(u, v) {
            self.storage.remove(source, target);
        }
    }
}
