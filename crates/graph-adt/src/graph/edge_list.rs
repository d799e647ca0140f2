use std::fmt::{self, Display};

use log::trace;
use rustc_hash::FxHashSet;

use crate::{
    Graph, Vertex,
    graph::{Degree, DegreeReport, VertexSet},
    types::Direction,
};

/// Graph stored as a vertex set plus a flat sequence of `(origin,
/// destination)` pairs.
///
/// No pair is stored twice. `(a, b)` and `(b, a)` are distinct pairs.
#[derive(Debug, Clone)]
pub struct EdgeListGraph<V> {
    vertices: VertexSet<V>,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> EdgeListGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: VertexSet::new(),
            edges: Vec::new(),
        }
    }

    /// Returns all pairs in insertion order.
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    fn position(&self, origin: &V, destination: &V) -> Option<usize> {
        self.edges
            .iter()
            .position(|(o, d)| o == origin && d == destination)
    }

    fn record(&mut self, origin: &V, destination: &V) -> bool {
        if self.position(origin, destination).is_some() {
            return false;
        }

        self.edges.push((origin.clone(), destination.clone()));
        true
    }

    fn erase(&mut self, origin: &V, destination: &V) -> bool {
        match self.position(origin, destination) {
            Some(position) => {
                self.edges.remove(position);
                true
            }
            None => false,
        }
    }
}

impl<V: Vertex> Default for EdgeListGraph<V> {
    fn default() -> Self {
        EdgeListGraph::new()
    }
}

impl<V: Vertex> Graph for EdgeListGraph<V> {
    type V = V;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.vertices.iter()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn insert_vertex(&mut self, vertex: V) -> bool {
        trace!("insert vertex {:?}", vertex);
        self.vertices.insert(vertex).is_some()
    }

    fn insert_edge(&mut self, origin: V, destination: V, direction: Direction) -> bool {
        trace!("insert edge {:?} -> {:?} ({:?})", origin, destination, direction);
        self.insert_vertex(origin.clone());
        self.insert_vertex(destination.clone());

        let mut recorded = self.record(&origin, &destination);
        if direction.is_undirected() {
            recorded |= self.record(&destination, &origin);
        }

        recorded
    }

    fn remove_edge(&mut self, origin: &V, destination: &V, direction: Direction) -> bool {
        trace!("remove edge {:?} -> {:?} ({:?})", origin, destination, direction);
        let mut removed = self.erase(origin, destination);
        if direction.is_undirected() {
            removed |= self.erase(destination, origin);
        }

        removed
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(index) = self.vertices.remove(vertex) else {
            return false;
        };
        trace!("remove vertex {:?} at index {}", vertex, index);

        self.edges
            .retain(|(origin, destination)| origin != vertex && destination != vertex);

        true
    }

    fn edge_exists(&self, origin: &V, destination: &V) -> bool {
        self.position(origin, destination).is_some()
    }

    /// Yields each destination once, in order of first appearance.
    fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        let mut seen: FxHashSet<&V> = FxHashSet::default();
        self.edges
            .iter()
            .filter(move |(origin, _)| origin == vertex)
            .map(|(_, destination)| destination)
            .filter(move |destination| seen.insert(*destination))
    }

    fn degrees(&self) -> DegreeReport<V> {
        let mut entries: Vec<(V, Degree)> = self
            .vertices
            .iter()
            .map(|vertex| (vertex.clone(), Degree::default()))
            .collect();

        for (origin, destination) in &self.edges {
            if let Some(i) = self.vertices.index_of(origin) {
                entries[i].1.count_outgoing();
            }
            if let Some(i) = self.vertices.index_of(destination) {
                entries[i].1.count_incoming();
            }
        }

        DegreeReport::Directed(entries)
    }
}

impl<V: Vertex + Display> Display for EdgeListGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.vertices.iter().map(ToString::to_string).collect();
        writeln!(f, "Vertices: [{}]", vertices.join(", "))?;
        writeln!(f, "Edges:")?;

        if self.edges.is_empty() {
            return writeln!(f, "  (no edges)");
        }

        for (origin, destination) in &self.edges {
            writeln!(f, "  {} -> {}", origin, destination)?;
        }

        Ok(())
    }
}
