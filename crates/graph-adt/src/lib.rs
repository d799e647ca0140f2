use std::{error::Error, fmt::Debug, fmt::Display, hash::Hash};

use graph::{Degree, DegreeReport};
use types::Direction;

pub mod graph;
pub mod types;

pub use graph::{
    adjacency_list::AdjacencyListGraph, adjacency_matrix::AdjacencyMatrixGraph,
    edge_list::EdgeListGraph,
};

#[derive(Debug, PartialEq, Eq)]
pub enum GraphError {
    EmptyVertex(usize),
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyVertex(position) => {
                write!(f, "vertex at position {} has an empty name", position)
            }
        }
    }
}

/// Identifier of a vertex.
///
/// Only equality and hashing are required. Representations keep their own
/// insertion order, so no ordering on the identifier itself is needed.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Mutable graph over vertex identifiers of type [`Graph::V`].
///
/// Absence is never an error: reading an unknown vertex yields an empty
/// result and removing one is a no-op. Directedness is chosen per call
/// through [`Direction`] and is not stored; an undirected edge is recorded
/// as the two directed relations `origin -> destination` and
/// `destination -> origin`.
pub trait Graph: Default {
    type V: Vertex;

    fn vertex_count(&self) -> usize;

    /// Number of stored directed relations.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices in insertion order.
    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a Self::V>
    where
        Self::V: 'a;

    fn contains_vertex(&self, vertex: &Self::V) -> bool;

    /// Adds `vertex` without any edges.
    ///
    /// Returns `false` and leaves the graph untouched if the vertex already
    /// exists.
    fn insert_vertex(&mut self, vertex: Self::V) -> bool;

    /// Records `origin -> destination`, plus the reverse relation when
    /// `direction` is [`Direction::Undirected`].
    ///
    /// Missing endpoints are inserted first. Returns `true` if at least one
    /// relation was newly recorded.
    fn insert_edge(
        &mut self,
        origin: Self::V,
        destination: Self::V,
        direction: Direction,
    ) -> bool;

    /// Removes `origin -> destination`, plus the reverse relation when
    /// `direction` is [`Direction::Undirected`].
    ///
    /// Returns `true` if at least one relation was removed.
    fn remove_edge(
        &mut self,
        origin: &Self::V,
        destination: &Self::V,
        direction: Direction,
    ) -> bool;

    /// Removes `vertex` and every edge it is an endpoint of.
    fn remove_vertex(&mut self, vertex: &Self::V) -> bool;

    fn edge_exists(&self, origin: &Self::V, destination: &Self::V) -> bool;

    /// Returns the vertices reachable from `vertex` over a single outgoing
    /// edge.
    ///
    /// The order is fixed by the insertion history. Unknown vertices have no
    /// neighbors.
    fn neighbors<'a>(&'a self, vertex: &Self::V) -> impl Iterator<Item = &'a Self::V>
    where
        Self::V: 'a;

    /// Computes the degree of every vertex by a full scan of the graph.
    fn degrees(&self) -> DegreeReport<Self::V>;

    fn degree(&self, vertex: &Self::V) -> Degree {
        self.degrees().get(vertex).unwrap_or_default()
    }

    /// Returns true if every consecutive pair of `path` is connected by an
    /// edge in that direction.
    ///
    /// Paths with fewer than two vertices are trivially valid, even if the
    /// vertex is unknown.
    fn valid_path(&self, path: &[Self::V]) -> bool {
        path.windows(2).all(|pair| self.edge_exists(&pair[0], &pair[1]))
    }
}
