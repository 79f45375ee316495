//! Topological ordering with Kahn's algorithm.

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::{Graph, GraphError, VertexId};

/// Errors that can occur while ordering a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The graph has a cycle, so no vertex on it ever reaches indegree 0.
    #[error(
        "Graph with {vertex_count} vertices has a cycle: only {} vertices could be ordered",
        .partial.len()
    )]
    CycleDetected {
        /// Number of vertices in the graph
        vertex_count: usize,
        /// The order built before the frontier ran dry
        partial: Vec<VertexId>,
    },

    /// The graph rejected a query made through its contract.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl SortError {
    /// Returns the incomplete order carried by a cycle failure.
    pub fn partial_order(&self) -> Option<&[VertexId]> {
        match self {
            SortError::CycleDetected { partial, .. } => Some(partial.as_slice()),
            SortError::Graph(_) => None,
        }
    }
}

/// Result type alias for sorting operations.
pub type SortResult<T> = Result<T, SortError>;

/// Orders every vertex so that each edge `u -> v` has `u` before `v`.
///
/// Vertices with no incoming edges seed a FIFO queue in ascending id order.
/// Each dequeued vertex is appended to the result and its outgoing edges
/// are removed from the tracked indegrees; a vertex whose indegree drops to
/// zero joins the back of the queue. The output is therefore deterministic
/// for a given graph.
///
/// Works on any [`Graph`], including `&dyn Graph`.
///
/// # Errors
///
/// [`SortError::CycleDetected`] if fewer than `vertex_count` vertices could
/// be ordered. The partial order is attached to the error.
///
/// # Example
///
/// ```rust
/// use dagsort::graph::{Graph, SetGraph};
/// use dagsort::sort::{topological_sort, SortError};
///
/// let mut graph = SetGraph::new(3, true);
/// graph.add_edge(2, 0, 1).unwrap();
/// graph.add_edge(0, 1, 1).unwrap();
/// assert_eq!(topological_sort(&graph).unwrap(), vec![2, 0, 1]);
///
/// graph.add_edge(1, 2, 1).unwrap(); // closes the cycle 2 -> 0 -> 1 -> 2
/// assert!(matches!(
///     topological_sort(&graph),
///     Err(SortError::CycleDetected { .. })
/// ));
/// ```
pub fn topological_sort<G: Graph + ?Sized>(graph: &G) -> SortResult<Vec<VertexId>> {
    let vertex_count = graph.vertex_count();
    let mut indegree = Vec::with_capacity(vertex_count);
    let mut queue = VecDeque::new();

    for vertex in graph.vertices() {
        let degree = graph.get_indegree(vertex)?;
        if degree == 0 {
            queue.push_back(vertex);
        }
        indegree.push(degree);
    }

    debug!(vertex_count, sources = queue.len(), "starting topological sort");

    let mut sorted = Vec::with_capacity(vertex_count);
    while let Some(vertex) = queue.pop_front() {
        sorted.push(vertex);

        for next in graph.get_adjacent_vertices(vertex)? {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if sorted.len() != vertex_count {
        debug!(
            vertex_count,
            ordered = sorted.len(),
            "topological sort stopped on a cycle"
        );
        return Err(SortError::CycleDetected {
            vertex_count,
            partial: sorted,
        });
    }

    Ok(sorted)
}

/// Returns true if the graph has no directed cycle.
///
/// Undirected graphs with at least one edge are never acyclic here, since
/// each edge is stored in both directions.
pub fn is_acyclic<G: Graph + ?Sized>(graph: &G) -> Result<bool, GraphError> {
    match topological_sort(graph) {
        Ok(_) => Ok(true),
        Err(SortError::CycleDetected { .. }) => Ok(false),
        Err(SortError::Graph(err)) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{to_petgraph, MatrixGraph, Representation, SetGraph};

    const SAMPLE_DAG: [(usize, usize); 10] = [
        (0, 1),
        (1, 2),
        (2, 7),
        (2, 4),
        (2, 3),
        (1, 5),
        (5, 6),
        (3, 6),
        (3, 4),
        (6, 8),
    ];

    fn sample(representation: Representation) -> Box<dyn Graph> {
        let mut graph = representation.build(9, true);
        for (u, v) in SAMPLE_DAG {
            graph.add_edge(u, v, 1).unwrap();
        }
        graph
    }

    fn assert_valid_order(graph: &dyn Graph, order: &[VertexId]) {
        assert_eq!(order.len(), graph.vertex_count());
        let mut position = vec![usize::MAX; graph.vertex_count()];
        for (index, &vertex) in order.iter().enumerate() {
            assert_eq!(position[vertex], usize::MAX, "vertex {} repeated", vertex);
            position[vertex] = index;
        }
        for edge in crate::graph::edges(graph) {
            assert!(
                position[edge.source] < position[edge.target],
                "{} must precede {}",
                edge.source,
                edge.target
            );
        }
    }

    #[test]
    fn test_sample_dag_dense() {
        let graph = sample(Representation::Dense);
        let order = topological_sort(&*graph).unwrap();
        assert_valid_order(&*graph, &order);
        assert_eq!(order, vec![0, 1, 2, 5, 3, 7, 4, 6, 8]);
    }

    #[test]
    fn test_sample_dag_sparse_matches_dense() {
        let dense = topological_sort(&*sample(Representation::Dense)).unwrap();
        let sparse = topological_sort(&*sample(Representation::Sparse)).unwrap();
        assert_eq!(dense, sparse);
    }

    #[test]
    fn test_ties_broken_by_ascending_id() {
        let graph = SetGraph::new(4, true);
        assert_eq!(topological_sort(&graph).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_discovery_order_after_seeding() {
        // 3 is a source; 0 only becomes free after 3 is processed
        let graph = MatrixGraph::with_edges(4, true, [(3, 0), (1, 2)]).unwrap();
        assert_eq!(topological_sort(&graph).unwrap(), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = MatrixGraph::new(0, true);
        assert_eq!(topological_sort(&graph).unwrap(), Vec::<VertexId>::new());
    }

    #[test]
    fn test_cycle_detected() {
        for representation in [Representation::Dense, Representation::Sparse] {
            let mut graph = representation.build(3, true);
            graph.add_edge(0, 1, 1).unwrap();
            graph.add_edge(1, 2, 1).unwrap();
            graph.add_edge(2, 0, 1).unwrap();

            let err = topological_sort(&*graph).unwrap_err();
            assert_eq!(
                err,
                SortError::CycleDetected {
                    vertex_count: 3,
                    partial: vec![]
                }
            );
        }
    }

    #[test]
    fn test_cycle_keeps_partial_order() {
        // 1 and 2 wait on each other; 0 and 3 are still ordered
        let graph = SetGraph::with_edges(4, true, [(0, 1), (1, 2), (2, 1)]).unwrap();
        let err = topological_sort(&graph).unwrap_err();
        assert_eq!(err.partial_order(), Some(&[0, 3][..]));
        assert!(err.to_string().contains("only 2 vertices"));
    }

    #[test]
    fn test_dense_self_loop_is_a_cycle() {
        let graph = MatrixGraph::with_edges(3, true, [(0, 1), (2, 2)]).unwrap();
        let err = topological_sort(&graph).unwrap_err();
        assert_eq!(err.partial_order(), Some(&[0, 1][..]));
    }

    #[test]
    fn test_undirected_edge_is_a_cycle() {
        let graph = SetGraph::with_edges(2, false, [(0, 1)]).unwrap();
        assert!(!is_acyclic(&graph).unwrap());
        assert!(is_acyclic(&SetGraph::new(2, false)).unwrap());
    }

    #[test]
    fn test_weights_do_not_affect_order() {
        let graph = MatrixGraph::with_edges(3, true, [(0, 2, 9), (1, 2, 1)]).unwrap();
        assert_eq!(topological_sort(&graph).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_agrees_with_petgraph_on_acyclicity() {
        let cases: [&[(usize, usize)]; 4] = [
            &SAMPLE_DAG,
            &[(0, 1), (1, 2), (2, 0)],
            &[(0, 3), (3, 1), (1, 4), (4, 3)],
            &[],
        ];
        for edges in cases {
            let graph = SetGraph::with_edges(9, true, edges.iter().copied()).unwrap();
            let expected = !petgraph::algo::is_cyclic_directed(&to_petgraph(&graph));
            assert_eq!(is_acyclic(&graph).unwrap(), expected);

            if let Ok(order) = topological_sort(&graph) {
                assert_valid_order(&graph, &order);
            }
        }
    }
}
