//! The `(source, target, weight)` edge value and its `u:v[:w]` text form.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::{VertexId, Weight};

/// A single directed edge.
///
/// Edges are values: adding one to a graph copies its endpoints and weight
/// into the graph's own storage.
///
/// # Example
///
/// ```rust
/// use dagsort::graph::Edge;
///
/// let edge: Edge = "2:7".parse().unwrap();
/// assert_eq!(edge, Edge::new(2, 7, 1));
///
/// let weighted: Edge = "0:1:5".parse().unwrap();
/// assert_eq!(weighted.weight, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Tail of the edge
    pub source: VertexId,
    /// Head of the edge
    pub target: VertexId,
    /// Stored weight (1 for unweighted edges)
    pub weight: Weight,
}

impl Edge {
    /// Creates a new weighted edge.
    pub fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Creates a new edge of weight 1.
    pub fn unweighted(source: VertexId, target: VertexId) -> Self {
        Self::new(source, target, 1)
    }

    /// Returns true if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Self::unweighted(source, target)
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    fn from((source, target, weight): (VertexId, VertexId, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.target, self.weight)
    }
}

/// Errors that can occur while parsing an edge from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEdgeError {
    /// The text is not of the form `u:v` or `u:v:w`.
    #[error("Invalid edge '{0}': expected SOURCE:TARGET or SOURCE:TARGET:WEIGHT")]
    Format(String),

    /// One of the components is not a non-negative integer.
    #[error("Invalid {field} '{value}' in edge: {source}")]
    Number {
        /// Which component failed ("source", "target" or "weight")
        field: &'static str,
        /// The text that failed to parse
        value: String,
        /// Underlying integer parse error
        source: ParseIntError,
    },
}

fn parse_component<T>(field: &'static str, value: &str) -> Result<T, ParseEdgeError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.trim().parse().map_err(|source| ParseEdgeError::Number {
        field,
        value: value.to_string(),
        source,
    })
}

impl FromStr for Edge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let (source, target, weight) = match parts.as_slice() {
            [source, target] => (*source, *target, None),
            [source, target, weight] => (*source, *target, Some(*weight)),
            _ => return Err(ParseEdgeError::Format(s.to_string())),
        };

        let source = parse_component("source", source)?;
        let target = parse_component("target", target)?;
        let weight = match weight {
            Some(weight) => parse_component("weight", weight)?,
            None => 1,
        };

        Ok(Self::new(source, target, weight))
    }
}
