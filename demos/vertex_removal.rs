//! Vertex Removal Example
//!
//! Demonstrates:
//! - Undirected edges stored in both directions
//! - Ids shifting down after a vertex is removed
//! - Out-of-range calls being ignored

use dualgraph::{Graph, Variant};

fn main() {
    println!("=== Vertex Removal Example ===\n");

    let mut graph = Graph::new(5, Variant::Undirected);
    graph.add_edge(1, 3, 7);
    graph.add_edge(2, 4, 2);
    graph.add_edge(4, 5, 9);
    graph.convert_to_matrix();
    println!("{graph}");

    println!("Removing vertex 3...");
    graph.remove_vertex(3);
    println!("{graph}");

    println!("Edges after removal:");
    for edge in graph.edges().filter(|e| e.source < e.target) {
        println!("  {} -- {} (w:{})", edge.source, edge.target, edge.weight);
    }

    println!("\nIgnored calls (vertex 42 does not exist):");
    let before = graph.clone();
    graph.add_edge(42, 1, 1);
    graph.remove_vertex(42);
    println!("  graph unchanged: {}", graph == before);
}
