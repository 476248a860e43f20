//! # dualgraph
//!
//! A small weighted graph whose edges live in one of two interchangeable
//! representations: a sparse adjacency list or a dense adjacency matrix.
//!
//! ## Features
//!
//! - **Switchable storage**: convert between list and matrix form at any time;
//!   only one form is held at once
//! - **Directed and undirected variants**: fixed at construction, deciding
//!   whether an edge call writes one direction or both
//! - **Contiguous vertex ids**: vertices are `1..=n`; removing one shifts the
//!   ids above it down
//! - **Random generation**: Erdős–Rényi population with an injectable,
//!   seedable random source
//!
//! ## Quick Start
//!
//! ```rust
//! use dualgraph::{Graph, Variant};
//!
//! let mut graph = Graph::new(4, Variant::Undirected);
//! graph.add_edge(1, 2, 7);
//! graph.add_edge(2, 4, 3);
//!
//! graph.convert_to_matrix();
//! assert_eq!(graph.matrix().unwrap().get(4, 2), 3);
//!
//! // Vertex operations switch back to list form.
//! graph.remove_vertex(3);
//! assert!(!graph.is_matrix());
//! assert_eq!(graph.weight(3, 2), Some(3));
//!
//! print!("{graph}");
//! ```
//!
//! ## Out-of-range ids
//!
//! Edge operations and vertex removal naming a vertex outside `1..=n` are
//! ignored. Only parameter validation (generation settings, builder input)
//! reports a [`GraphError`].
//!
//! ## Zero weights
//!
//! A matrix cell of `0` means "no edge". A zero-weight edge added in list
//! form is therefore dropped by a conversion to matrix form.
//!
//! ## Logging
//!
//! Enable the `logging` feature to emit `log` records for conversions,
//! vertex changes, generation and ignored calls.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod builder;
pub mod edge;
pub mod error;
pub mod generate;
pub mod graph;
pub mod integration;
pub mod render;
pub mod storage;
pub mod variant;

pub use builder::GraphBuilder;
pub use edge::{DEFAULT_WEIGHT, Edge, Neighbor, Weight};
pub use error::GraphError;
pub use generate::GenerationConfig;
pub use graph::Graph;
pub use integration::EdgeSource;
pub use storage::{AdjacencyList, AdjacencyMatrix, Edges, Form, Representation};
pub use variant::{CandidatePairs, Variant};
