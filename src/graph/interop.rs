//! Conversion into petgraph, for cross-checking against its algorithms.

use petgraph::graph::{DiGraph, NodeIndex};

use super::{edges, Graph, VertexId, Weight};

/// Copies any [`Graph`] into a petgraph `DiGraph`.
///
/// Node `i` of the result carries vertex id `i` as its weight, so
/// `NodeIndex::index()` maps straight back to a [`VertexId`]. Undirected
/// graphs become a pair of opposite directed edges per connection.
///
/// # Example
///
/// ```rust
/// use dagsort::graph::{to_petgraph, Graph, MatrixGraph};
///
/// let mut graph = MatrixGraph::new(3, true);
/// graph.add_edge(0, 1, 2).unwrap();
/// graph.add_edge(1, 2, 5).unwrap();
///
/// let converted = to_petgraph(&graph);
/// assert_eq!(converted.node_count(), 3);
/// assert_eq!(converted.edge_count(), 2);
/// assert!(!petgraph::algo::is_cyclic_directed(&converted));
/// ```
pub fn to_petgraph<G: Graph + ?Sized>(graph: &G) -> DiGraph<VertexId, Weight> {
    let mut converted = DiGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    let nodes: Vec<NodeIndex> = graph.vertices().map(|v| converted.add_node(v)).collect();

    for edge in edges(graph) {
        converted.add_edge(nodes[edge.source], nodes[edge.target], edge.weight);
    }

    converted
}
