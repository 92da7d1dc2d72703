//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

/// Edge weight. Weights are non-negative by construction.
pub type Weight = u64;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Row order of each node's targets is the insertion order of its adjacency list,
/// which traversals rely on.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes; dense indices are 0..node_count
    pub node_count: usize,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,
    /// Edge weights: aligned with `out_targets`
    pub out_weights: Vec<Weight>,

    /// Every directed edge as (source, target, weight) in discovery order
    pub edges: Vec<(usize, usize, Weight)>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> &[Weight] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_weights[start..end]
    }

    /// Iterate (target, weight) pairs of a node in adjacency order
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.successors(idx)
            .iter()
            .copied()
            .zip(self.weights(idx).iter().copied())
    }

    /// Build a view from per-node adjacency rows and an explicit edge discovery order.
    pub fn from_parts(
        node_count: usize,
        outgoing: Vec<Vec<(usize, Weight)>>,
        edges: Vec<(usize, usize, Weight)>,
    ) -> Self {
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut out_weights = Vec::new();

        out_offsets.push(0);
        for row in outgoing {
            for (target, weight) in row {
                out_targets.push(target);
                out_weights.push(weight);
            }
            out_offsets.push(out_targets.len());
        }
        // Nodes without a row still need an offset entry.
        while out_offsets.len() < node_count + 1 {
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            out_weights,
            edges,
        }
    }

    /// Helper to create GraphView from adjacency lists (test support).
    ///
    /// Edge discovery order is taken to be row order.
    pub fn from_adjacency_list(outgoing: Vec<Vec<(usize, Weight)>>) -> Self {
        let edges = outgoing
            .iter()
            .enumerate()
            .flat_map(|(u, row)| row.iter().map(move |&(v, w)| (u, v, w)))
            .collect();
        Self::from_parts(outgoing.len(), outgoing, edges)
    }
}
