//! Runtime selection between the dense and sparse representations.

use serde::Serialize;

use super::{Graph, MatrixGraph, SetGraph};

/// Which backing store a graph uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Adjacency matrix, weighted edges ([`MatrixGraph`])
    #[default]
    Dense,
    /// Adjacency sets, unweighted edges ([`SetGraph`])
    Sparse,
}

impl Representation {
    /// Creates an empty graph of this representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dagsort::graph::Representation;
    ///
    /// let mut graph = Representation::Sparse.build(3, true);
    /// graph.add_edge(0, 1, 1).unwrap();
    /// assert!(graph.add_edge(1, 2, 5).is_err()); // sparse graphs are unweighted
    /// ```
    pub fn build(self, vertex_count: usize, directed: bool) -> Box<dyn Graph> {
        match self {
            Representation::Dense => Box::new(MatrixGraph::new(vertex_count, directed)),
            Representation::Sparse => Box::new(SetGraph::new(vertex_count, directed)),
        }
    }
}

impl std::str::FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dense" | "matrix" => Ok(Representation::Dense),
            "sparse" | "set" => Ok(Representation::Sparse),
            _ => Err(format!(
                "Unknown representation: '{}'. Valid representations: dense, sparse",
                s
            )),
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::Dense => write!(f, "dense"),
            Representation::Sparse => write!(f, "sparse"),
        }
    }
}
