//! Graph module: the capability contract and its two representations.
//!
//! [`MatrixGraph`] stores a dense weight grid, [`SetGraph`] stores one
//! adjacency set per vertex. Both implement [`Graph`], which is all the
//! algorithms in [`crate::sort`] rely on.
//!
//! # Example
//!
//! ```rust
//! use dagsort::graph::{Graph, MatrixGraph, SetGraph};
//!
//! let mut dense = MatrixGraph::new(4, true);
//! dense.add_edge(0, 1, 1).unwrap();
//! dense.add_edge(2, 2, 1).unwrap(); // dense graphs accept self-loops
//!
//! let mut sparse = SetGraph::new(4, true);
//! sparse.add_edge(0, 1, 1).unwrap();
//! assert!(sparse.add_edge(2, 2, 1).is_err());
//!
//! assert_eq!(dense.get_indegree(1).unwrap(), sparse.get_indegree(1).unwrap());
//! ```

mod edge;
mod error;
mod interop;
mod matrix;
mod representation;
mod set;
mod traits;

pub use edge::{Edge, ParseEdgeError};
pub use error::{GraphError, GraphResult};
pub use interop::to_petgraph;
pub use matrix::MatrixGraph;
pub use representation::Representation;
pub use set::{SetGraph, SET_EDGE_WEIGHT};
pub use traits::{adjacency, display, edges, write_edges, Adjacency, Graph, VertexId, Weight};
