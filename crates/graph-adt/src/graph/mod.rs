use std::slice;

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::Vertex;

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod edge_list;

/// Ordered set of unique vertices.
///
/// Every vertex has a position which equals its rank in insertion order
/// among the vertices still present. Removing a vertex shifts all later
/// positions down by one.
#[derive(Debug, Clone)]
pub struct VertexSet<V> {
    vertices: Vec<V>,
    positions: FxHashMap<V, usize>,
}

impl<V: Vertex> VertexSet<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// Appends `vertex` and returns its position, or `None` if it is already
    /// a member.
    pub fn insert(&mut self, vertex: V) -> Option<usize> {
        if self.positions.contains_key(&vertex) {
            return None;
        }

        let index = self.vertices.len();
        self.positions.insert(vertex.clone(), index);
        self.vertices.push(vertex);

        Some(index)
    }

    /// Removes `vertex` and returns the position it had before removal.
    pub fn remove(&mut self, vertex: &V) -> Option<usize> {
        let index = self.positions.remove(vertex)?;
        self.vertices.remove(index);

        for shifted in &self.vertices[index..] {
            if let Some(position) = self.positions.get_mut(shifted) {
                *position -= 1;
            }
        }

        Some(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.vertices
    }
}

impl<V: Vertex> Default for VertexSet<V> {
    fn default() -> Self {
        VertexSet::new()
    }
}

impl<V: PartialEq> PartialEq for VertexSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.eq(&other.vertices)
    }
}

impl<'a, V: Vertex> IntoIterator for &'a VertexSet<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Incoming, outgoing and total edge count of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Degree {
    #[serde(rename = "in")]
    incoming: usize,
    #[serde(rename = "out")]
    outgoing: usize,
    total: usize,
}

impl Degree {
    pub fn new(incoming: usize, outgoing: usize) -> Self {
        Self {
            incoming,
            outgoing,
            total: incoming + outgoing,
        }
    }

    pub fn incoming(&self) -> usize {
        self.incoming
    }

    pub fn outgoing(&self) -> usize {
        self.outgoing
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn count_incoming(&mut self) {
        self.incoming += 1;
        self.total += 1;
    }

    pub(crate) fn count_outgoing(&mut self) {
        self.outgoing += 1;
        self.total += 1;
    }
}

/// Result of a degree computation, in vertex order.
///
/// `Undirected` is only produced by the adjacency matrix when its edge set
/// happens to be symmetric. That classification is recomputed on every call
/// and is a heuristic: a graph meant to be undirected but missing one reverse
/// relation is reported as `Directed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegreeReport<V> {
    Directed(Vec<(V, Degree)>),
    Undirected(Vec<(V, usize)>),
}

impl<V: Vertex> DegreeReport<V> {
    /// Returns the degree of `vertex`.
    ///
    /// An undirected degree `d` is reported as `d` incoming and `d` outgoing
    /// relations, which is what the underlying symmetric edge set stores.
    pub fn get(&self, vertex: &V) -> Option<Degree> {
        self.iter().find(|(v, _)| *v == vertex).map(|(_, d)| d)
    }

    /// Returns the single degree of `vertex` if the report is undirected.
    pub fn undirected_degree(&self, vertex: &V) -> Option<usize> {
        match self {
            Self::Directed(_) => None,
            Self::Undirected(entries) => entries
                .iter()
                .find(|(v, _)| v == vertex)
                .map(|(_, d)| *d),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = (&V, Degree)> + '_> {
        match self {
            Self::Directed(entries) => Box::new(entries.iter().map(|(v, d)| (v, *d))),
            Self::Undirected(entries) => {
                Box::new(entries.iter().map(|(v, d)| (v, Degree::new(*d, *d))))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Directed(entries) => entries.len(),
            Self::Undirected(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_undirected(&self) -> bool {
        matches!(self, Self::Undirected(_))
    }
}

impl<V: Serialize> Serialize for DegreeReport<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Directed(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (vertex, degree) in entries {
                    map.serialize_entry(vertex, degree)?;
                }
                map.end()
            }
            Self::Undirected(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (vertex, degree) in entries {
                    map.serialize_entry(vertex, degree)?;
                }
                map.end()
            }
        }
    }
}
