//! Reports summarising a topological sort run.
//!
//! A [`SortReport`] captures the graph's shape and the outcome of
//! [`topological_sort`], and renders it as plain text or JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::graph::{Graph, GraphError, Representation, VertexId};
use crate::sort::{topological_sort, SortError};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON document - machine-readable
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// What the sort produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SortOutcome {
    /// Every vertex was ordered
    Sorted {
        /// The topological order
        order: Vec<VertexId>,
    },
    /// The graph has a cycle
    Cycle {
        /// Vertices ordered before the cycle blocked progress
        partial: Vec<VertexId>,
    },
}

/// Summary of one sort run over a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortReport {
    /// Backing store of the graph
    pub representation: Representation,
    /// Number of vertices
    pub vertex_count: usize,
    /// Whether the graph is directed
    pub directed: bool,
    /// Number of stored adjacency entries
    pub edge_count: usize,
    /// Order or cycle diagnostics
    pub outcome: SortOutcome,
}

impl SortReport {
    /// Sorts `graph` and records the outcome.
    ///
    /// A cycle is part of the report rather than an error; only failures of
    /// the graph itself are returned as `Err`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dagsort::graph::{Graph, Representation};
    /// use dagsort::report::SortReport;
    ///
    /// let mut graph = Representation::Dense.build(2, true);
    /// graph.add_edge(1, 0, 1).unwrap();
    ///
    /// let report = SortReport::run(Representation::Dense, graph.as_ref()).unwrap();
    /// assert!(report.is_sorted());
    /// assert_eq!(report.order(), Some(&[1, 0][..]));
    /// ```
    pub fn run(representation: Representation, graph: &dyn Graph) -> Result<Self, GraphError> {
        let outcome = match topological_sort(graph) {
            Ok(order) => SortOutcome::Sorted { order },
            Err(SortError::CycleDetected { partial, .. }) => SortOutcome::Cycle { partial },
            Err(SortError::Graph(err)) => return Err(err),
        };

        Ok(Self {
            representation,
            vertex_count: graph.vertex_count(),
            directed: graph.is_directed(),
            edge_count: graph.edge_count(),
            outcome,
        })
    }

    /// Returns true if every vertex was ordered.
    pub fn is_sorted(&self) -> bool {
        matches!(self.outcome, SortOutcome::Sorted { .. })
    }

    /// The full order, if the graph was acyclic.
    pub fn order(&self) -> Option<&[VertexId]> {
        match &self.outcome {
            SortOutcome::Sorted { order } => Some(order.as_slice()),
            SortOutcome::Cycle { .. } => None,
        }
    }

    /// Writes the report in the given format.
    pub fn write<W: Write>(&self, format: ReportFormat, writer: &mut W) -> io::Result<()> {
        match format {
            ReportFormat::Text => self.write_text(writer),
            ReportFormat::Json => self.write_json(writer),
        }
    }

    fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "{} {} graph: {} vertices, {} edges",
            self.representation,
            if self.directed { "directed" } else { "undirected" },
            self.vertex_count,
            self.edge_count
        )?;
        match &self.outcome {
            SortOutcome::Sorted { order } => writeln!(writer, "Topological order: {:?}", order),
            SortOutcome::Cycle { partial } => {
                writeln!(
                    writer,
                    "Cycle detected: ordered {} of {} vertices",
                    partial.len(),
                    self.vertex_count
                )?;
                writeln!(writer, "Partial order: {:?}", partial)
            }
        }
    }

    fn write_json<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", json)
    }

    /// Renders the report to a string.
    pub fn to_string_as(&self, format: ReportFormat) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(format, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
