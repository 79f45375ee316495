//! dagsort - dense and sparse in-memory graphs with topological sorting
//!
//! This crate provides two interchangeable graph representations behind a
//! single [`graph::Graph`] trait, and Kahn's algorithm for ordering the
//! vertices of a directed acyclic graph.

pub mod graph;
pub mod report;
pub mod sort;
