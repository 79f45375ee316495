//! Dense graph representation backed by an adjacency matrix.
//!
//! Cell `[v1, v2]` holds the weight of the edge `v1 -> v2`. A zero cell
//! means there is no edge, so a stored weight is always at least 1.

use std::fmt;

use ndarray::{Array2, ArrayView2};
use tracing::trace;

use super::traits::fmt_edges;
use super::{Edge, Graph, GraphError, GraphResult, VertexId, Weight};

/// A weighted graph stored as a `vertex_count × vertex_count` grid.
///
/// Lookups of a single edge are O(1); listing adjacent vertices or computing
/// an indegree scans one row or column. Self-loops are allowed.
///
/// # Example
///
/// ```rust
/// use dagsort::graph::{Graph, MatrixGraph};
///
/// let mut graph = MatrixGraph::new(3, false);
/// graph.add_edge(0, 2, 4).unwrap();
///
/// assert_eq!(graph.get_edge_weight(0, 2).unwrap(), 4);
/// assert_eq!(graph.get_edge_weight(2, 0).unwrap(), 4); // mirrored
/// assert_eq!(graph.get_edge_weight(0, 1).unwrap(), 0); // no edge
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    /// Edge weights, row = source, column = target
    matrix: Array2<Weight>,
    /// Whether insertions are mirrored to the transposed cell
    directed: bool,
}

impl MatrixGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            matrix: Array2::zeros((vertex_count, vertex_count)),
            directed,
        }
    }

    /// Creates a graph and inserts every edge from `edges` in order.
    ///
    /// Stops at the first edge that fails to insert.
    pub fn with_edges<I, E>(vertex_count: usize, directed: bool, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(vertex_count, directed);
        for edge in edges {
            let edge = edge.into();
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }

    /// Read-only view of the weight grid.
    pub fn matrix(&self) -> ArrayView2<'_, Weight> {
        self.matrix.view()
    }
}

impl Graph for MatrixGraph {
    fn vertex_count(&self) -> usize {
        self.matrix.nrows()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_edge(&mut self, v1: VertexId, v2: VertexId, weight: Weight) -> GraphResult<()> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        if weight < 1 {
            return Err(GraphError::InvalidWeight {
                weight,
                reason: "an edge can't have weight < 1",
            });
        }

        trace!(v1, v2, weight, directed = self.directed, "matrix edge");
        self.matrix[[v1, v2]] = weight;
        if !self.directed {
            self.matrix[[v2, v1]] = weight;
        }
        Ok(())
    }

    fn get_adjacent_vertices(&self, v: VertexId) -> GraphResult<Vec<VertexId>> {
        self.check_vertex(v)?;
        Ok(self
            .matrix
            .row(v)
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight > 0)
            .map(|(target, _)| target)
            .collect())
    }

    fn get_indegree(&self, v: VertexId) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.matrix.column(v).iter().filter(|&&weight| weight > 0).count())
    }

    fn get_edge_weight(&self, v1: VertexId, v2: VertexId) -> GraphResult<Weight> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        Ok(self.matrix[[v1, v2]])
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_edges(self, f)
    }
}
