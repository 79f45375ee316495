//! Sparse graph representation backed by one adjacency set per vertex.
//!
//! Only unweighted edges can be stored: every edge has weight 1 and
//! self-loops are refused.

use std::collections::BTreeSet;
use std::fmt;

use tracing::trace;

use super::traits::fmt_edges;
use super::{Edge, Graph, GraphError, GraphResult, VertexId, Weight};

/// The only weight an adjacency set can represent.
pub const SET_EDGE_WEIGHT: Weight = 1;

/// A vertex together with the ids it has an outgoing edge to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    id: VertexId,
    adjacent: BTreeSet<VertexId>,
}

impl Node {
    fn new(id: VertexId) -> Self {
        Self {
            id,
            adjacent: BTreeSet::new(),
        }
    }

    fn add_edge(&mut self, target: VertexId) -> GraphResult<()> {
        if self.id == target {
            return Err(GraphError::SelfLoopRejected { vertex: target });
        }
        self.adjacent.insert(target);
        Ok(())
    }

    fn is_adjacent(&self, target: VertexId) -> bool {
        self.adjacent.contains(&target)
    }

    fn adjacent_vertices(&self) -> Vec<VertexId> {
        self.adjacent.iter().copied().collect()
    }
}

/// An unweighted graph stored as per-vertex adjacency sets.
///
/// Memory grows with the number of edges rather than the square of the
/// vertex count. Indegree is computed by scanning every set; no reverse
/// index is kept.
///
/// # Example
///
/// ```rust
/// use dagsort::graph::{Graph, GraphError, SetGraph};
///
/// let mut graph = SetGraph::new(4, true);
/// graph.add_edge(0, 3, 1).unwrap();
/// graph.add_edge(0, 1, 1).unwrap();
///
/// assert_eq!(graph.get_adjacent_vertices(0).unwrap(), vec![1, 3]);
/// assert_eq!(
///     graph.add_edge(2, 2, 1),
///     Err(GraphError::SelfLoopRejected { vertex: 2 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetGraph {
    nodes: Vec<Node>,
    directed: bool,
}

impl SetGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            nodes: (0..vertex_count).map(Node::new).collect(),
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
}

impl Graph for SetGraph {
    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_edge(&mut self, v1: VertexId, v2: VertexId, weight: Weight) -> GraphResult<()> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        if weight != SET_EDGE_WEIGHT {
            return Err(GraphError::InvalidWeight {
                weight,
                reason: "an adjacency set can only represent unweighted edges",
            });
        }

        trace!(v1, v2, directed = self.directed, "set edge");
        // a self-loop fails here, before the mirrored insert
        self.nodes[v1].add_edge(v2)?;
        if !self.directed {
            self.nodes[v2].add_edge(v1)?;
        }
        Ok(())
    }

    fn get_adjacent_vertices(&self, v: VertexId) -> GraphResult<Vec<VertexId>> {
        self.check_vertex(v)?;
        Ok(self.nodes[v].adjacent_vertices())
    }

    fn get_indegree(&self, v: VertexId) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.nodes.iter().filter(|node| node.is_adjacent(v)).count())
    }

    /// Always [`SET_EDGE_WEIGHT`] for in-bounds ids, whether or not the
    /// edge exists.
    fn get_edge_weight(&self, v1: VertexId, v2: VertexId) -> GraphResult<Weight> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        Ok(SET_EDGE_WEIGHT)
    }

    fn has_edge(&self, v1: VertexId, v2: VertexId) -> GraphResult<bool> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        Ok(self.nodes[v1].is_adjacent(v2))
    }

    fn outdegree(&self, v: VertexId) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.nodes[v].adjacent.len())
    }
}

impl fmt::Display for SetGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_edges(self, f)
    }
}
