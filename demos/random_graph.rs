//! Random Graph Example
//!
//! Demonstrates:
//! - Erdős–Rényi generation on a directed graph
//! - Switching between list and matrix storage
//! - Adding a vertex, which switches back to list storage
//!
//! Pass a number as the first argument to make the run reproducible.

use dualgraph::{GenerationConfig, GraphBuilder, Variant};

const SEPARATOR: &str = "-----------------------";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = std::env::args().nth(1).map(|s| s.parse::<u64>()).transpose()?;
    let vertices = 5;
    let config = GenerationConfig::new(0.5, 1, 10);

    println!("Creating Directed Graph with {vertices} vertices...");
    println!(
        "Generating random edges (Erdos-Renyi model, p={})...",
        config.probability
    );
    let mut builder = GraphBuilder::new(Variant::Directed)
        .vertices(vertices)
        .random(config);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let mut graph = builder.build()?;
    println!(
        "Random {:?} graph generated ({} edges)",
        graph.variant(),
        graph.edge_count()
    );
    print!("{graph}");
    println!("{SEPARATOR}");

    println!("Converting to Matrix...");
    graph.convert_to_matrix();
    print!("{graph}");
    println!("{SEPARATOR}");

    println!("Adding new vertex (Auto-convert to List)...");
    let id = graph.add_vertex();
    graph.add_edge(id, 1, 99);
    print!("{graph}");
    println!("{SEPARATOR}");

    Ok(())
}
