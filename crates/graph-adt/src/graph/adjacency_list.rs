use std::fmt::{self, Display};

use log::trace;

use crate::{
    Graph, Vertex,
    graph::{Degree, DegreeReport, VertexSet},
    types::Direction,
};

/// Graph storing one neighbor sequence per vertex.
///
/// A sequence keeps the literal insertion history: inserting the same edge
/// twice records the destination twice, and removing it once drops only the
/// first occurrence.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V> {
    vertices: VertexSet<V>,
    // `adjacency[i]` holds the destinations of `vertices[i]`.
    adjacency: Vec<Vec<V>>,
}

impl<V: Vertex> AdjacencyListGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: VertexSet::new(),
            adjacency: Vec::new(),
        }
    }

    /// Returns the recorded destinations of `vertex`, duplicates included.
    pub fn targets(&self, vertex: &V) -> &[V] {
        match self.vertices.index_of(vertex) {
            Some(index) => &self.adjacency[index],
            None => &[],
        }
    }

    fn index(&self, vertex: &V) -> usize {
        self.vertices
            .index_of(vertex)
            .expect("endpoint was inserted before recording the edge")
    }

    fn remove_relation(&mut self, origin: &V, destination: &V) -> bool {
        let Some(index) = self.vertices.index_of(origin) else {
            return false;
        };

        let targets = &mut self.adjacency[index];
        match targets.iter().position(|target| target == destination) {
            Some(position) => {
                targets.remove(position);
                true
            }
            None => false,
        }
    }
}

impl<V: Vertex> Default for AdjacencyListGraph<V> {
    fn default() -> Self {
        AdjacencyListGraph::new()
    }
}

impl<V: Vertex> Graph for AdjacencyListGraph<V> {
    type V = V;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
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
        if self.vertices.insert(vertex).is_none() {
            return false;
        }

        self.adjacency.push(Vec::new());
        true
    }

    fn insert_edge(&mut self, origin: V, destination: V, direction: Direction) -> bool {
        trace!("insert edge {:?} -> {:?} ({:?})", origin, destination, direction);
        self.insert_vertex(origin.clone());
        self.insert_vertex(destination.clone());

        let origin_index = self.index(&origin);
        let destination_index = self.index(&destination);

        self.adjacency[origin_index].push(destination);
        if direction.is_undirected() {
            self.adjacency[destination_index].push(origin);
        }

        true
    }

    fn remove_edge(&mut self, origin: &V, destination: &V, direction: Direction) -> bool {
        trace!("remove edge {:?} -> {:?} ({:?})", origin, destination, direction);
        let forward = self.remove_relation(origin, destination);
        let reverse = direction.is_undirected() && self.remove_relation(destination, origin);

        forward || reverse
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(index) = self.vertices.remove(vertex) else {
            return false;
        };
        trace!("remove vertex {:?} at index {}", vertex, index);

        self.adjacency.remove(index);
        self.adjacency
            .iter_mut()
            .for_each(|targets| targets.retain(|target| target != vertex));

        true
    }

    fn edge_exists(&self, origin: &V, destination: &V) -> bool {
        self.targets(origin).contains(destination)
    }

    fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.targets(vertex).iter()
    }

    /// Out-degree is the length of the own sequence, in-degree the number of
    /// occurrences across all sequences.
    fn degrees(&self) -> DegreeReport<V> {
        let entries = self
            .vertices
            .iter()
            .zip(&self.adjacency)
            .map(|(vertex, targets)| {
                let incoming = self
                    .adjacency
                    .iter()
                    .flatten()
                    .filter(|target| *target == vertex)
                    .count();

                (vertex.clone(), Degree::new(incoming, targets.len()))
            })
            .collect();

        DegreeReport::Directed(entries)
    }
}

impl<V: Vertex + Display> Display for AdjacencyListGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, targets) in self.vertices.iter().zip(&self.adjacency) {
            let targets: Vec<String> = targets.iter().map(ToString::to_string).collect();
            writeln!(f, "{} -> [{}]", vertex, targets.join(", "))?;
        }

        Ok(())
    }
}
