//! Dense Dijkstra shortest path.
//!
//! O(V²) relaxation over the dense weight matrix: each round selects the
//! unsettled node with the minimum known distance by a linear scan (ties
//! break to the lowest index, deterministically) and relaxes its unsettled
//! neighbors. No priority-queue acceleration; department counts are small.
//!
//! Path reconstruction walks the `parent` array backward from the
//! destination into a buffer and reverses it. An unreachable destination is
//! reported as [`RouteError::Unreachable`] before any reconstruction, never
//! as a partial trace.

use crate::routing::graph::{RouteError, RouteGraph};

/// A computed shortest route between two departments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    distance: u64,
    nodes: Vec<usize>,
}

impl Route {
    /// Total path distance
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Node indices from source to destination inclusive
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Department names along the route, in travel order.
    ///
    /// Indices always come from the graph the route was computed on, so
    /// every lookup resolves.
    pub fn named(&self, graph: &RouteGraph) -> Vec<String> {
        self.nodes
            .iter()
            .filter_map(|&idx| graph.node_name(idx).map(|n| n.to_string()))
            .collect()
    }
}

impl RouteGraph {
    /// Shortest path from `src` to `dest`.
    ///
    /// # Returns
    ///
    /// * `Ok(Route)` - distance and full node path (single-node path with
    ///   distance 0 when `src == dest`)
    /// * `Err(RouteError::InvalidNode)` - either endpoint out of range
    /// * `Err(RouteError::Unreachable)` - no path exists
    pub fn shortest_path(&self, src: usize, dest: usize) -> Result<Route, RouteError> {
        self.check_node(src)?;
        self.check_node(dest)?;

        if src == dest {
            return Ok(Route {
                distance: 0,
                nodes: vec![src],
            });
        }

        let n = self.num_nodes();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        dist[src] = Some(0);

        for _ in 0..n.saturating_sub(1) {
            // Select the unsettled node with minimum known distance.
            // Lowest index wins ties (first found in the scan).
            let mut selected: Option<(usize, u64)> = None;
            for v in 0..n {
                if settled[v] {
                    continue;
                }
                if let Some(d) = dist[v] {
                    if selected.map_or(true, |(_, best)| d < best) {
                        selected = Some((v, d));
                    }
                }
            }

            // Every remaining node is unreachable
            let Some((u, du)) = selected else { break };
            settled[u] = true;

            for v in 0..n {
                if settled[v] {
                    continue;
                }
                if let Some(w) = self.weight(u, v) {
                    let candidate = du + u64::from(w);
                    if dist[v].map_or(true, |d| candidate < d) {
                        dist[v] = Some(candidate);
                        parent[v] = Some(u);
                    }
                }
            }
        }

        let Some(distance) = dist[dest] else {
            return Err(RouteError::Unreachable { src, dest });
        };

        // Backward parent walk, then reverse into travel order
        let mut nodes = vec![dest];
        let mut current = dest;
        while let Some(p) = parent[current] {
            nodes.push(p);
            current = p;
        }
        nodes.reverse();

        Ok(Route { distance, nodes })
    }
}
