//! Sorting algorithms over the [`Graph`](crate::graph::Graph) contract.
//!
//! Nothing here depends on a concrete representation: any type implementing
//! [`Graph`](crate::graph::Graph) can be ordered.

mod topological;

pub use topological::{is_acyclic, topological_sort, SortError, SortResult};
