//! Department graph and shortest-path routing.
//!
//! - `graph.rs`: named-node weighted graph over a dense matrix
//! - `dijkstra.rs`: O(V²) single-source shortest path + route reconstruction

pub mod dijkstra;
pub mod graph;

pub use dijkstra::Route;
pub use graph::{Orientation, RouteError, RouteGraph};
