//! Weighted department graph.
//!
//! Departments are nodes with a dense integer index `0..num_nodes` assigned
//! at construction and a caller-supplied name. Edge weights live in a single
//! contiguous `num_nodes × num_nodes` buffer indexed `row * n + col`;
//! `None` is the "no edge" sentinel. Directed edges set one entry,
//! undirected edges set both.
//!
//! Weights are `u32`, so negative weights (unsupported by the shortest-path
//! algorithm) are unrepresentable. Self-loop entries are never traversed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from graph construction and routing queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("department index {index} out of range for {num_nodes} departments")]
    InvalidNode { index: usize, num_nodes: usize },

    #[error("no path exists from department {src} to department {dest}")]
    Unreachable { src: usize, dest: usize },
}

/// Edge orientation for a batch of edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Directed,
    Undirected,
}

/// Weighted graph over named department nodes.
///
/// # Example
///
/// ```rust
/// use triage_dispatch_core_rs::RouteGraph;
///
/// let mut graph = RouteGraph::new(vec!["ER".into(), "ICU".into()]);
/// graph.add_edge(0, 1, 4).unwrap();
///
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.weight(0, 1), Some(4));
/// assert_eq!(graph.weight(1, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct RouteGraph {
    /// Node index → department name
    names: Vec<String>,

    /// Dense weight matrix, `row * num_nodes + col`; None = no edge
    weights: Vec<Option<u32>>,
}

impl RouteGraph {
    /// Create a graph with one node per name and no edges
    pub fn new(names: Vec<String>) -> Self {
        let n = names.len();
        Self {
            names,
            weights: vec![None; n * n],
        }
    }

    /// Number of department nodes
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Department name for a node index
    pub fn node_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|s| s.as_str())
    }

    /// Node index for a department name (first match)
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Weight of the directed edge `src → dest`, if present.
    ///
    /// Out-of-range indices read as "no edge".
    pub fn weight(&self, src: usize, dest: usize) -> Option<u32> {
        if src >= self.num_nodes() || dest >= self.num_nodes() {
            return None;
        }
        self.weights[src * self.num_nodes() + dest]
    }

    /// Add (or overwrite) the directed edge `src → dest`
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: u32) -> Result<(), RouteError> {
        self.check_node(src)?;
        self.check_node(dest)?;
        let n = self.num_nodes();
        self.weights[src * n + dest] = Some(weight);
        Ok(())
    }

    /// Add the edge in both directions with the same weight
    pub fn add_edge_undirected(
        &mut self,
        src: usize,
        dest: usize,
        weight: u32,
    ) -> Result<(), RouteError> {
        self.add_edge(src, dest, weight)?;
        self.add_edge(dest, src, weight)
    }

    /// Install a batch of edges with the given orientation
    pub fn install_edges(
        &mut self,
        orientation: Orientation,
        edges: &[(usize, usize, u32)],
    ) -> Result<(), RouteError> {
        for &(src, dest, weight) in edges {
            match orientation {
                Orientation::Directed => self.add_edge(src, dest, weight)?,
                Orientation::Undirected => self.add_edge_undirected(src, dest, weight)?,
            }
        }
        Ok(())
    }

    pub(crate) fn check_node(&self, index: usize) -> Result<(), RouteError> {
        if index >= self.num_nodes() {
            return Err(RouteError::InvalidNode {
                index,
                num_nodes: self.num_nodes(),
            });
        }
        Ok(())
    }
}
