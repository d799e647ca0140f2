use graph_adt::{
    AdjacencyListGraph, AdjacencyMatrixGraph, EdgeListGraph, Graph, types::Direction,
};
use serde_json::json;

mod common;

#[test]
fn symmetric_matrix_dumps_single_degrees() {
    let mut graph = AdjacencyMatrixGraph::new();
    graph.insert_edge("A", "B", Direction::Undirected);
    graph.insert_edge("B", "C", Direction::Undirected);

    let dump = serde_json::to_value(graph.degrees()).unwrap();

    assert_eq!(dump, json!({ "A": 1, "B": 2, "C": 1 }));
}

#[test]
fn directed_matrix_dumps_in_out_total() {
    let graph: AdjacencyMatrixGraph<&str> = common::setup();

    let dump = serde_json::to_value(graph.degrees()).unwrap();

    assert_eq!(dump["C"], json!({ "in": 2, "out": 3, "total": 5 }));
    assert_eq!(dump["D"], json!({ "in": 1, "out": 0, "total": 1 }));
}

#[test]
fn list_and_edge_list_dump_alike() {
    let list: AdjacencyListGraph<&str> = common::setup();
    let edges: EdgeListGraph<&str> = common::setup();

    let list_dump = serde_json::to_string(&list.degrees()).unwrap();
    let edges_dump = serde_json::to_string(&edges.degrees()).unwrap();

    assert_eq!(list_dump, edges_dump);
    assert!(
        list_dump.starts_with(r#"{"A":{"in":2,"out":2,"total":4}"#),
        "Vertices should be dumped in insertion order: {list_dump}"
    );
}
