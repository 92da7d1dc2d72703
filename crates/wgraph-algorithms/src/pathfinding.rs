//! Pathfinding algorithms
//!
//! Single-source Dijkstra over non-negative weights.

use super::common::{GraphView, Weight};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Distances and predecessor links from one source to every reachable node
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathTree {
    /// Dense index of the source
    pub source: usize,
    /// Best known distance per dense index, `None` if unreachable
    pub distances: Vec<Option<Weight>>,
    /// Predecessor on a shortest path per dense index
    pub parents: Vec<Option<usize>>,
}

impl ShortestPathTree {
    pub fn distance(&self, idx: usize) -> Option<Weight> {
        self.distances.get(idx).copied().flatten()
    }

    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parents.get(idx).copied().flatten()
    }

    /// Reachable nodes other than the source, in index order
    pub fn reachable(&self) -> impl Iterator<Item = usize> + '_ {
        let source = self.source;
        self.distances
            .iter()
            .enumerate()
            .filter(move |&(idx, d)| idx != source && d.is_some())
            .map(|(idx, _)| idx)
    }
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: Weight,
    node_idx: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap; equal costs pop the lower index first
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Paths from one source)
///
/// Stale heap entries are skipped on pop rather than removed eagerly.
/// A predecessor is only replaced on a strictly shorter distance.
/// Returns `None` if `source` is out of range.
pub fn dijkstra(view: &GraphView, source: usize) -> Option<ShortestPathTree> {
    if source >= view.node_count {
        return None;
    }

    let mut dist: Vec<Option<Weight>> = vec![None; view.node_count];
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(State { cost: 0, node_idx: source });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if dist[node_idx].map_or(false, |settled| cost > settled) {
            continue;
        }

        for (next_idx, weight) in view.neighbors(node_idx) {
            let next_cost = cost.saturating_add(weight);

            if dist[next_idx].map_or(true, |known| next_cost < known) {
                dist[next_idx] = Some(next_cost);
                parent[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    Some(ShortestPathTree {
        source,
        distances: dist,
        parents: parent,
    })
}
