//! The capability contract shared by every graph representation.
//!
//! Algorithms such as [`crate::sort::topological_sort`] are written against
//! [`Graph`] only, so a caller can swap the dense and sparse representations
//! without touching the algorithm.

use std::fmt;
use std::io::{self, Write};
use std::ops::Range;

use super::{Edge, GraphError, GraphResult};

/// Identifier of a vertex. Valid ids are `0..vertex_count`.
pub type VertexId = usize;

/// Weight stored on an edge. `0` means "no edge" in the dense representation.
pub type Weight = u32;

/// Operations every graph representation must support.
///
/// The vertex set is fixed at construction and is always the contiguous
/// range `0..vertex_count()`. Edges are added one at a time with
/// [`Graph::add_edge`]; undirected graphs mirror every insertion.
///
/// The trait is object safe, so `Box<dyn Graph>` and `&dyn Graph` work
/// anywhere a generic `G: Graph + ?Sized` is accepted.
///
/// # Example
///
/// ```rust
/// use dagsort::graph::{Graph, MatrixGraph, SetGraph};
///
/// fn wire(graph: &mut dyn Graph) {
///     graph.add_edge(0, 1, 1).unwrap();
///     graph.add_edge(0, 2, 1).unwrap();
///     graph.add_edge(2, 3, 1).unwrap();
/// }
///
/// let mut dense = MatrixGraph::new(4, true);
/// let mut sparse = SetGraph::new(4, true);
/// wire(&mut dense);
/// wire(&mut sparse);
///
/// assert_eq!(dense.get_adjacent_vertices(0).unwrap(), vec![1, 2]);
/// assert_eq!(sparse.get_adjacent_vertices(0).unwrap(), vec![1, 2]);
/// assert_eq!(dense.get_indegree(3).unwrap(), sparse.get_indegree(3).unwrap());
/// ```
pub trait Graph {
    /// Number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Whether edges are one-way.
    fn is_directed(&self) -> bool;

    /// Inserts the edge `v1 -> v2`, plus `v2 -> v1` when the graph is undirected.
    ///
    /// # Errors
    ///
    /// - [`GraphError::OutOfBounds`] when either id is not a vertex
    /// - [`GraphError::InvalidWeight`] when the representation can't store `weight`
    /// - [`GraphError::SelfLoopRejected`] when the representation refuses `v1 == v2`
    fn add_edge(&mut self, v1: VertexId, v2: VertexId, weight: Weight) -> GraphResult<()>;

    /// Returns the targets of every outgoing edge of `v`, ascending by id.
    fn get_adjacent_vertices(&self, v: VertexId) -> GraphResult<Vec<VertexId>>;

    /// Returns the number of vertices with an edge into `v`.
    fn get_indegree(&self, v: VertexId) -> GraphResult<usize>;

    /// Returns the weight stored for `v1 -> v2`.
    fn get_edge_weight(&self, v1: VertexId, v2: VertexId) -> GraphResult<Weight>;

    /// Inserts an edge of weight 1.
    fn add_unweighted_edge(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<()> {
        self.add_edge(v1, v2, 1)
    }

    /// Range of all vertex ids.
    fn vertices(&self) -> Range<VertexId> {
        0..self.vertex_count()
    }

    /// Fails with [`GraphError::OutOfBounds`] unless `v` is a vertex of this graph.
    fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::OutOfBounds {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Returns true when `v2` is adjacent to `v1`.
    fn has_edge(&self, v1: VertexId, v2: VertexId) -> GraphResult<bool> {
        self.check_vertex(v2)?;
        Ok(self.get_adjacent_vertices(v1)?.binary_search(&v2).is_ok())
    }

    /// Number of outgoing edges of `v`.
    fn outdegree(&self, v: VertexId) -> GraphResult<usize> {
        Ok(self.get_adjacent_vertices(v)?.len())
    }

    /// Number of stored adjacency entries.
    ///
    /// An undirected edge between two distinct vertices counts twice,
    /// once in each direction.
    fn edge_count(&self) -> usize {
        self.vertices()
            .filter_map(|v| self.outdegree(v).ok())
            .sum()
    }

    /// Returns true when the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// Restartable iterator over `(vertex, adjacent vertices)` pairs.
///
/// Created by [`adjacency`]. Vertices are yielded in ascending order and each
/// adjacency list is ascending as well.
pub struct Adjacency<'a, G: ?Sized> {
    graph: &'a G,
    vertices: Range<VertexId>,
}

impl<G: ?Sized> Clone for Adjacency<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            vertices: self.vertices.clone(),
        }
    }
}

impl<G: Graph + ?Sized> Iterator for Adjacency<'_, G> {
    type Item = (VertexId, Vec<VertexId>);

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.vertices.next()?;
        // ids come from the graph's own range, so the lookup can't go out of bounds
        let adjacent = self.graph.get_adjacent_vertices(vertex).unwrap_or_default();
        Some((vertex, adjacent))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vertices.size_hint()
    }
}

impl<G: Graph + ?Sized> ExactSizeIterator for Adjacency<'_, G> {}

/// Enumerates every vertex together with its adjacent vertices.
///
/// # Example
///
/// ```rust
/// use dagsort::graph::{adjacency, Graph, SetGraph};
///
/// let mut graph = SetGraph::new(3, true);
/// graph.add_edge(0, 2, 1).unwrap();
///
/// let pairs: Vec<_> = adjacency(&graph).collect();
/// assert_eq!(pairs, vec![(0, vec![2]), (1, vec![]), (2, vec![])]);
/// ```
pub fn adjacency<G: Graph + ?Sized>(graph: &G) -> Adjacency<'_, G> {
    Adjacency {
        graph,
        vertices: graph.vertices(),
    }
}

/// Returns every stored edge, ascending by source then target.
pub fn edges<G: Graph + ?Sized>(graph: &G) -> impl Iterator<Item = Edge> + '_ {
    adjacency(graph).flat_map(move |(source, adjacent)| {
        adjacent.into_iter().map(move |target| {
            let weight = graph.get_edge_weight(source, target).unwrap_or_default();
            Edge::new(source, target, weight)
        })
    })
}

/// Writes one `"<u> --> <v>"` line per edge, ascending by source then target.
pub fn write_edges<G, W>(graph: &G, writer: &mut W) -> io::Result<()>
where
    G: Graph + ?Sized,
    W: Write,
{
    for (source, adjacent) in adjacency(graph) {
        for target in adjacent {
            writeln!(writer, "{} --> {}", source, target)?;
        }
    }
    Ok(())
}

/// Prints the edge listing of [`write_edges`] to stdout.
pub fn display<G: Graph + ?Sized>(graph: &G) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_edges(graph, &mut handle)
}

/// Shared `Display` body for the concrete representations.
pub(crate) fn fmt_edges<G: Graph + ?Sized>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (source, adjacent) in adjacency(graph) {
        for target in adjacent {
            writeln!(f, "{} --> {}", source, target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MatrixGraph, SetGraph};

    fn sample(graph: &mut dyn Graph) {
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
    }

    fn both() -> Vec<Box<dyn Graph>> {
        let mut dense: Box<dyn Graph> = Box::new(MatrixGraph::new(4, true));
        let mut sparse: Box<dyn Graph> = Box::new(SetGraph::new(4, true));
        sample(dense.as_mut());
        sample(sparse.as_mut());
        vec![dense, sparse]
    }

    #[test]
    fn test_vertices_range() {
        let graph = MatrixGraph::new(4, true);
        assert_eq!(graph.vertices(), 0..4);
        assert!(!graph.is_empty());
        assert!(MatrixGraph::new(0, true).is_empty());
    }

    #[test]
    fn test_check_vertex() {
        let graph = SetGraph::new(3, false);
        assert!(graph.check_vertex(2).is_ok());
        assert_eq!(
            graph.check_vertex(3),
            Err(GraphError::OutOfBounds {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_adjacency_enumeration() {
        for graph in both() {
            let pairs: Vec<_> = adjacency(&*graph).collect();
            assert_eq!(
                pairs,
                vec![(0, vec![1, 2]), (1, vec![]), (2, vec![3]), (3, vec![])]
            );
        }
    }

    #[test]
    fn test_adjacency_is_restartable() {
        let graph = MatrixGraph::new(4, true);
        let iter = adjacency(&graph);
        assert_eq!(iter.len(), 4);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_indegree_matches_adjacency() {
        for graph in both() {
            for v in graph.vertices() {
                let expected = adjacency(&*graph)
                    .filter(|(_, adjacent)| adjacent.contains(&v))
                    .count();
                assert_eq!(graph.get_indegree(v).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_edges_listing() {
        let mut graph = MatrixGraph::new(3, true);
        graph.add_edge(1, 2, 7).unwrap();
        graph.add_edge(0, 2, 3).unwrap();

        let listed: Vec<_> = edges(&graph).collect();
        assert_eq!(listed, vec![Edge::new(0, 2, 3), Edge::new(1, 2, 7)]);
    }

    #[test]
    fn test_write_edges() {
        for graph in both() {
            let mut buffer = Vec::new();
            write_edges(&*graph, &mut buffer).unwrap();
            let output = String::from_utf8(buffer).unwrap();
            assert_eq!(output, "0 --> 1\n0 --> 2\n2 --> 3\n");
        }
    }

    #[test]
    fn test_display_to_stdout() {
        let graph = SetGraph::with_edges(3, true, [(0, 1), (1, 2)]).unwrap();
        assert!(display(&graph).is_ok());
    }

    #[test]
    fn test_has_edge_and_degrees() {
        for graph in both() {
            assert!(graph.has_edge(0, 2).unwrap());
            assert!(!graph.has_edge(2, 0).unwrap());
            assert!(graph.has_edge(0, 9).is_err());
            assert_eq!(graph.outdegree(0).unwrap(), 2);
            assert_eq!(graph.edge_count(), 3);
        }
    }

    #[test]
    fn test_add_unweighted_edge() {
        let mut graph = SetGraph::new(2, true);
        graph.add_unweighted_edge(0, 1).unwrap();
        assert_eq!(graph.get_edge_weight(0, 1).unwrap(), 1);
    }
}
