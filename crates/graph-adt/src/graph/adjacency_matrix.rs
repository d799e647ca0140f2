use std::{
    fmt::{self, Display},
    mem,
};

use log::{debug, trace};

use crate::{
    Graph, Vertex,
    graph::{Degree, DegreeReport, VertexSet},
    types::Direction,
};

/// Square boolean matrix, `rows[i][j]` is the relation `i -> j`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SquareMatrix {
    rows: Vec<Vec<bool>>,
}

impl SquareMatrix {
    fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Adds an empty last row and column.
    fn grow(&mut self) {
        self.rows.iter_mut().for_each(|row| row.push(false));
        self.rows.push(vec![false; self.rows.len() + 1]);
    }

    /// Drops row and column `index`.
    fn shrink(&mut self, index: usize) {
        self.rows.remove(index);
        self.rows.iter_mut().for_each(|row| {
            row.remove(index);
        });
    }

    fn get(&self, row: usize, column: usize) -> bool {
        self.rows[row][column]
    }

    /// Sets a cell and returns its previous value.
    fn set(&mut self, row: usize, column: usize, value: bool) -> bool {
        mem::replace(&mut self.rows[row][column], value)
    }

    fn row(&self, row: usize) -> &[bool] {
        &self.rows[row]
    }

    fn row_sum(&self, row: usize) -> usize {
        self.rows[row].iter().filter(|cell| **cell).count()
    }

    fn column_sum(&self, column: usize) -> usize {
        self.rows.iter().filter(|row| row[column]).count()
    }

    fn count(&self) -> usize {
        (0..self.dimension()).map(|row| self.row_sum(row)).sum()
    }

    /// An empty or all-zero matrix is symmetric.
    fn is_symmetric(&self) -> bool {
        let n = self.dimension();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

/// Graph stored as a vertex set plus a square adjacency matrix.
///
/// Row and column `i` always belong to the `i`-th vertex and the matrix
/// dimension always equals the vertex count. Both are only changed together
/// inside [`Graph::insert_vertex`] and [`Graph::remove_vertex`].
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<V> {
    vertices: VertexSet<V>,
    matrix: SquareMatrix,
}

impl<V: Vertex> AdjacencyMatrixGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: VertexSet::new(),
            matrix: SquareMatrix::default(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    /// Returns cell `(row, column)`, or `None` if out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<bool> {
        if row < self.dimension() && column < self.dimension() {
            Some(self.matrix.get(row, column))
        } else {
            None
        }
    }

    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// Returns true if `i -> j` is recorded exactly when `j -> i` is.
    ///
    /// This is a property of the current edge set, not a stored flag.
    pub fn is_symmetric(&self) -> bool {
        self.matrix.is_symmetric()
    }

    fn index(&self, vertex: &V) -> usize {
        self.vertices
            .index_of(vertex)
            .expect("endpoint was inserted before recording the edge")
    }

    fn indices(&self, origin: &V, destination: &V) -> Option<(usize, usize)> {
        Some((
            self.vertices.index_of(origin)?,
            self.vertices.index_of(destination)?,
        ))
    }
}

impl<V: Vertex> Default for AdjacencyMatrixGraph<V> {
    fn default() -> Self {
        AdjacencyMatrixGraph::new()
    }
}

impl<V: Vertex> Graph for AdjacencyMatrixGraph<V> {
    type V = V;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.matrix.count()
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

        self.matrix.grow();
        debug_assert_eq!(self.matrix.dimension(), self.vertices.len());
        true
    }

    fn insert_edge(&mut self, origin: V, destination: V, direction: Direction) -> bool {
        trace!("insert edge {:?} -> {:?} ({:?})", origin, destination, direction);
        self.insert_vertex(origin.clone());
        self.insert_vertex(destination.clone());

        let i = self.index(&origin);
        let j = self.index(&destination);

        let mut recorded = !self.matrix.set(i, j, true);
        if direction.is_undirected() {
            recorded |= !self.matrix.set(j, i, true);
        }

        recorded
    }

    fn remove_edge(&mut self, origin: &V, destination: &V, direction: Direction) -> bool {
        trace!("remove edge {:?} -> {:?} ({:?})", origin, destination, direction);
        let Some((i, j)) = self.indices(origin, destination) else {
            return false;
        };

        let mut removed = self.matrix.set(i, j, false);
        if direction.is_undirected() {
            removed |= self.matrix.set(j, i, false);
        }

        removed
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(index) = self.vertices.remove(vertex) else {
            return false;
        };
        trace!("remove vertex {:?} at index {}", vertex, index);

        self.matrix.shrink(index);
        debug_assert_eq!(self.matrix.dimension(), self.vertices.len());
        true
    }

    fn edge_exists(&self, origin: &V, destination: &V) -> bool {
        self.indices(origin, destination)
            .is_some_and(|(i, j)| self.matrix.get(i, j))
    }

    /// Yields neighbors in column order.
    fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.vertices
            .index_of(vertex)
            .into_iter()
            .flat_map(move |i| {
                self.matrix
                    .row(i)
                    .iter()
                    .zip(self.vertices.iter())
                    .filter(|(cell, _)| **cell)
                    .map(|(_, neighbor)| neighbor)
            })
    }

    /// Reports a single degree per vertex (the row sum) if the matrix is
    /// symmetric, otherwise row sums as out-degree and column sums as
    /// in-degree.
    fn degrees(&self) -> DegreeReport<V> {
        if self.matrix.is_symmetric() {
            debug!(
                "symmetric adjacency matrix ({} vertices), reporting undirected degrees",
                self.dimension()
            );
            let entries = self
                .vertices
                .iter()
                .enumerate()
                .map(|(i, vertex)| (vertex.clone(), self.matrix.row_sum(i)))
                .collect();

            return DegreeReport::Undirected(entries);
        }

        let entries = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| {
                let degree = Degree::new(self.matrix.column_sum(i), self.matrix.row_sum(i));
                (vertex.clone(), degree)
            })
            .collect();

        DegreeReport::Directed(entries)
    }
}

impl<V: Vertex + Display> Display for AdjacencyMatrixGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return writeln!(f, "(empty graph)");
        }

        write!(f, "      ")?;
        for vertex in &self.vertices {
            write!(f, "{:^4}", vertex.to_string())?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "------".repeat(self.vertices.len() + 1))?;

        for (vertex, row) in self.vertices.iter().zip(&self.matrix.rows) {
            write!(f, "{:<5} |", vertex.to_string())?;
            for cell in row {
                write!(f, "{:^4}", u8::from(*cell))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::*;

    fn setup() -> AdjacencyMatrixGraph<&'static str> {
        let mut graph = AdjacencyMatrixGraph::new();
        ["A", "B", "C", "D"].into_iter().for_each(|v| {
            graph.insert_vertex(v);
        });

        graph.insert_edge("A", "B", Direction::Undirected);
        graph.insert_edge("B", "C", Direction::Undirected);
        graph.insert_edge("A", "C", Direction::Undirected);

        graph
    }

    fn assert_square<V: Vertex>(graph: &AdjacencyMatrixGraph<V>) {
        assert_eq!(graph.dimension(), graph.vertex_count());
        assert!(
            graph
                .matrix
                .rows
                .iter()
                .all(|row| row.len() == graph.vertex_count()),
            "every row should have one cell per vertex"
        );
    }

    #[test]
    fn grow_and_shrink() {
        let mut graph = setup();
        assert_square(&graph);

        assert!(graph.remove_vertex(&"B"));
        assert_square(&graph);

        assert_eq!(graph.vertex_at(0), Some(&"A"));
        assert_eq!(graph.vertex_at(1), Some(&"C"));
        assert_eq!(graph.cell(0, 1), Some(true), "A -> C should move to (0, 1)");
        assert_eq!(graph.cell(1, 0), Some(true));
        assert_eq!(graph.cell(2, 2), Some(false));
        assert_eq!(graph.cell(3, 0), None);
    }

    #[test]
    fn symmetric_degrees() {
        let graph = setup();
        let degrees = graph.degrees();

        assert!(graph.is_symmetric());
        assert!(degrees.is_undirected());
        assert_eq!(degrees.undirected_degree(&"A"), Some(2));
        assert_eq!(degrees.undirected_degree(&"D"), Some(0));
    }

    #[test]
    fn directed_degrees() {
        let mut graph = setup();
        graph.insert_edge("C", "D", Direction::Directed);
        let degrees = graph.degrees();

        assert!(!graph.is_symmetric());
        assert!(!degrees.is_undirected());
        assert_eq!(degrees.get(&"C"), Some(Degree::new(2, 3)));
        assert_eq!(degrees.get(&"D"), Some(Degree::new(1, 0)));
    }

    #[test]
    fn empty_matrix_is_symmetric() {
        let graph = AdjacencyMatrixGraph::<&str>::new();

        assert!(graph.is_symmetric());
        assert_eq!(graph.degrees(), DegreeReport::Undirected(vec![]));
    }

    #[test]
    fn insert_edge_reports_new_relations() {
        let mut graph = AdjacencyMatrixGraph::new();

        assert!(graph.insert_edge("X", "Y", Direction::Directed));
        assert!(!graph.insert_edge("X", "Y", Direction::Directed));
        assert!(graph.insert_edge("X", "Y", Direction::Undirected));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn neighbors_in_column_order() {
        let mut graph = setup();
        graph.insert_edge("C", "D", Direction::Directed);

        assert_eq!(
            graph.neighbors(&"C").collect::<Vec<_>>(),
            vec![&"A", &"B", &"D"]
        );
        assert_eq!(graph.neighbors(&"D").count(), 0);
    }

    #[test]
    fn display() {
        let mut graph = AdjacencyMatrixGraph::new();
        graph.insert_edge("A", "B", Direction::Directed);

        assert_eq!(
            graph.to_string(),
            "       A   B  \n\
             ------------------\n\
             A     | 0   1  \n\
             B     | 0   0  \n"
        );
        assert_eq!(
            AdjacencyMatrixGraph::<&str>::new().to_string(),
            "(empty graph)\n"
        );
    }

    #[test]
    fn cells_follow_vertices_under_random_mutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut graph = AdjacencyMatrixGraph::<u32>::new();
        let mut edges: HashSet<(u32, u32)> = HashSet::new();

        for _ in 0..500 {
            let a = rng.random_range(0..8);
            let b = rng.random_range(0..8);
            let direction = Direction::from(rng.random_bool(0.5));

            match rng.random_range(0..4) {
                0 => {
                    graph.insert_vertex(a);
                }
                1 => {
                    graph.remove_vertex(&a);
                    edges.retain(|(o, d)| *o != a && *d != a);
                }
                2 => {
                    graph.insert_edge(a, b, direction);
                    edges.insert((a, b));
                    if direction.is_undirected() {
                        edges.insert((b, a));
                    }
                }
                _ => {
                    graph.remove_edge(&a, &b, direction);
                    edges.remove(&(a, b));
                    if direction.is_undirected() {
                        edges.remove(&(b, a));
                    }
                }
            }

            assert_square(&graph);
            assert_eq!(graph.edge_count(), edges.len());
            for i in 0..graph.dimension() {
                for j in 0..graph.dimension() {
                    let origin = *graph.vertex_at(i).unwrap();
                    let destination = *graph.vertex_at(j).unwrap();
                    let expected = edges.contains(&(origin, destination));

                    assert_eq!(graph.cell(i, j), Some(expected));
                    assert_eq!(graph.edge_exists(&origin, &destination), expected);
                }
            }
        }
    }
}
