//! Integration tests for dualgraph

use std::collections::{BTreeMap, BTreeSet};

use dualgraph::{EdgeSource, Form, GenerationConfig, Graph, GraphBuilder, Variant, Weight};
use petgraph::algo::is_isomorphic_matching;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Collapses stored entries the way a matrix would: last write wins, zeros dropped.
fn effective_edges(graph: &Graph) -> BTreeSet<(usize, usize, Weight)> {
    let mut cells = BTreeMap::new();
    for edge in graph.edges() {
        cells.insert((edge.source, edge.target), edge.weight);
    }
    cells
        .into_iter()
        .filter(|&(_, w)| w != 0)
        .map(|((s, t), w)| (s, t, w))
        .collect()
}

fn to_petgraph<S: EdgeSource>(source: &S) -> DiGraph<(), Weight> {
    let mut pg = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..source.vertex_count()).map(|_| pg.add_node(())).collect();
    for edge in source.iter_edges() {
        pg.add_edge(nodes[edge.source - 1], nodes[edge.target - 1], edge.weight);
    }
    pg
}

fn random_graph(variant: Variant, vertices: usize, seed: u64) -> Graph {
    GraphBuilder::new(variant)
        .vertices(vertices)
        .random(GenerationConfig::new(0.4, 1, 9))
        .seed(seed)
        .build()
        .unwrap()
}

#[test]
fn test_round_trip_list_matrix_list() {
    for seed in 0..20 {
        let mut graph = random_graph(Variant::Directed, 7, seed);
        // Duplicates and a zero-weight entry that the matrix cannot keep.
        graph.add_edge(1, 2, 11);
        graph.add_edge(1, 2, 12);
        graph.add_edge(3, 4, 0);
        let expected = effective_edges(&graph);

        graph.convert_to_matrix();
        assert_eq!(effective_edges(&graph), expected);

        graph.convert_to_list();
        assert_eq!(effective_edges(&graph), expected);
        assert_eq!(graph.edge_count(), expected.len());
        assert_eq!(graph.weight(1, 2), Some(12));
    }
}

#[test]
fn test_round_trip_matrix_list_matrix() {
    let mut graph = random_graph(Variant::Undirected, 6, 99);
    graph.convert_to_matrix();
    let before = graph.clone();

    graph.convert_to_list();
    graph.convert_to_matrix();
    assert_eq!(graph, before);
}

#[test]
fn test_round_trip_sorts_rows() {
    let mut graph = Graph::directed(4);
    graph.add_edge(1, 4, 1);
    graph.add_edge(1, 2, 2);
    graph.add_edge(1, 3, 3);

    graph.convert_to_matrix();
    graph.convert_to_list();

    let row: Vec<usize> = graph
        .list()
        .unwrap()
        .neighbors(1)
        .iter()
        .map(|n| n.vertex)
        .collect();
    assert_eq!(row, vec![2, 3, 4]);
}

#[test]
fn test_conversions_are_idempotent() {
    let mut once = random_graph(Variant::Directed, 6, 5);
    let mut twice = once.clone();

    once.convert_to_matrix();
    twice.convert_to_matrix();
    twice.convert_to_matrix();
    assert_eq!(once, twice);
    assert_eq!(twice.form(), Form::Matrix);

    once.convert_to_list();
    twice.convert_to_list();
    twice.convert_to_list();
    assert_eq!(once, twice);
    assert_eq!(twice.form(), Form::List);
}

#[test]
fn test_undirected_symmetry_under_mutation() {
    let mut rng = StdRng::seed_from_u64(0xDE17A);
    let mut graph = random_graph(Variant::Undirected, 6, 3);

    let assert_symmetric = |graph: &Graph| {
        for u in 1..=graph.vertex_count() {
            for v in 1..=graph.vertex_count() {
                assert_eq!(graph.weight(u, v), graph.weight(v, u), "({u}, {v})");
            }
        }
    };

    assert_symmetric(&graph);
    for step in 0..200 {
        // Ids up to 7 so some calls fall out of range.
        let u = rng.random_range(0..=7);
        let v = rng.random_range(0..=7);
        match rng.random_range(0..4) {
            0 => graph.add_edge(u, v, rng.random_range(1..=5)),
            1 => graph.remove_edge(u, v),
            2 => graph.convert_to_matrix(),
            _ => graph.convert_to_list(),
        }
        if step % 50 == 49 {
            graph.remove_vertex(u);
            graph.add_vertex();
        }
        assert_symmetric(&graph);
    }
}

#[test]
fn test_remove_vertex_renumbers() {
    for start in [Form::List, Form::Matrix] {
        let mut graph = Graph::directed(5);
        graph.add_edge(1, 3, 7);
        graph.add_edge(2, 4, 2);
        graph.add_edge(4, 5, 9);
        if start == Form::Matrix {
            graph.convert_to_matrix();
        }

        graph.remove_vertex(3);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.form(), Form::List);
        let edges: BTreeSet<_> = effective_edges(&graph);
        assert_eq!(edges, BTreeSet::from([(2, 3, 2), (3, 4, 9)]));
        assert!(graph.edges().all(|e| e.source <= 4 && e.target <= 4));
    }
}

#[test]
fn test_remove_vertex_undirected_drops_both_sides() {
    let mut graph = Graph::undirected(4);
    graph.add_edge(1, 2, 1);
    graph.add_edge(2, 3, 2);
    graph.add_edge(3, 4, 3);

    graph.remove_vertex(2);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(
        effective_edges(&graph),
        BTreeSet::from([(2, 3, 3), (3, 2, 3)])
    );
    assert!(graph.list().unwrap().neighbors(1).is_empty());
}

#[test]
fn test_out_of_range_calls_are_ignored() {
    for form in [Form::List, Form::Matrix] {
        let mut graph = random_graph(Variant::Undirected, 5, 11);
        if form == Form::Matrix {
            graph.convert_to_matrix();
        }
        let before = graph.clone();

        graph.remove_edge(0, 1);
        graph.add_edge(100, 1, 4);
        graph.add_edge(1, 6, 4);
        graph.remove_vertex(0);
        graph.remove_vertex(6);
        graph.remove_vertex(usize::MAX);

        assert_eq!(graph, before);
        assert_eq!(graph.form(), form);
    }
}

#[test]
fn test_generation_complete_and_empty() {
    let mut complete = Graph::undirected(6);
    let added = complete
        .generate_random(&GenerationConfig::new(1.0, 1, 10))
        .unwrap();
    assert_eq!(added, 15);

    let list = complete.list().unwrap();
    for i in 1..=6 {
        for j in 1..=6 {
            let count = list.neighbors(i).iter().filter(|n| n.vertex == j).count();
            assert_eq!(count, usize::from(i != j), "({i}, {j})");
        }
    }
    assert!(complete.edges().all(|e| (1..=10).contains(&e.weight)));

    let mut empty = Graph::directed(6);
    empty
        .generate_random(&GenerationConfig::new(0.0, 1, 10))
        .unwrap();
    assert_eq!(empty.edge_count(), 0);
}

#[test]
fn test_directed_asymmetry() {
    let mut graph = Graph::directed(3);
    graph.add_edge(1, 2, 5);

    assert_eq!(graph.weight(1, 2), Some(5));
    assert_eq!(graph.weight(2, 1), None);
    assert!(graph.list().unwrap().neighbors(2).is_empty());

    graph.convert_to_matrix();
    let matrix = graph.matrix().unwrap();
    assert_eq!(matrix.get(1, 2), 5);
    assert_eq!(matrix.get(2, 1), 0);
}

#[test]
fn test_zero_weight_lost_in_matrix() {
    let mut graph = Graph::directed(2);
    graph.add_edge(1, 2, 0);
    assert_eq!(graph.weight(1, 2), Some(0));

    graph.convert_to_matrix();
    assert_eq!(graph.weight(1, 2), None);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_petgraph_sees_same_graph_in_both_forms() {
    let mut graph = random_graph(Variant::Directed, 8, 0xFACE);
    let from_list = to_petgraph(&graph);
    assert_eq!(from_list.edge_count(), graph.edge_count());

    graph.convert_to_matrix();
    let from_matrix = to_petgraph(&graph);

    assert!(is_isomorphic_matching(
        &from_list,
        &from_matrix,
        |a, b| a == b,
        |a, b| a == b
    ));
}

#[test]
fn test_petgraph_undirected_degrees_balance() {
    let graph = random_graph(Variant::Undirected, 9, 0xCAFE);
    let pg = to_petgraph(&graph);

    for node in pg.node_indices() {
        let outgoing = pg.neighbors_directed(node, Direction::Outgoing).count();
        let incoming = pg.neighbors_directed(node, Direction::Incoming).count();
        assert_eq!(outgoing, incoming);
    }
}

#[test]
fn test_demo_walkthrough() {
    let mut graph = GraphBuilder::new(Variant::Directed)
        .random(GenerationConfig::default())
        .seed(2024)
        .build()
        .unwrap();
    let generated = effective_edges(&graph);

    graph.convert_to_matrix();
    assert!(graph.render().starts_with("Adjacency Matrix (V=5):"));

    assert_eq!(graph.add_vertex(), 6);
    graph.add_edge(6, 1, 99);

    assert_eq!(graph.form(), Form::List);
    assert_eq!(graph.weight(6, 1), Some(99));
    let mut expected = generated;
    expected.insert((6, 1, 99));
    assert_eq!(effective_edges(&graph), expected);
    assert!(graph.render().ends_with("[6] -> 1(w:99)\n"));
}
