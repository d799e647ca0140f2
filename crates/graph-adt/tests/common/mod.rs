use graph_adt::{Graph, types::Direction};

/// Vertices A, B, C, D with undirected edges A-B, B-C, A-C and the directed
/// edge C -> D.
pub fn setup<G: Graph<V = &'static str>>() -> G {
    let mut graph = G::default();
    for vertex in ["A", "B", "C", "D"] {
        graph.insert_vertex(vertex);
    }

    graph.insert_edge("A", "B", Direction::Undirected);
    graph.insert_edge("B", "C", Direction::Undirected);
    graph.insert_edge("A", "C", Direction::Undirected);
    graph.insert_edge("C", "D", Direction::Directed);

    graph
}

pub fn sorted_neighbors<G: Graph<V = &'static str>>(
    graph: &G,
    vertex: &'static str,
) -> Vec<&'static str> {
    let mut neighbors: Vec<&'static str> = graph.neighbors(&vertex).copied().collect();
    neighbors.sort();
    neighbors
}
