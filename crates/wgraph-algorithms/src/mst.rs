//! Minimum Spanning Tree algorithms
//!
//! Implements Prim's (rooted) and Kruskal's (forest) algorithms.
//! Both expect an undirected graph stored as mirrored directed edges.

use super::common::{GraphView, Weight};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MSTResult {
    pub total_weight: Weight,
    pub edges: Vec<(usize, usize, Weight)>, // (source, target, weight) as dense indices
}

#[derive(Copy, Clone, PartialEq, Eq)]
struct EdgeState {
    weight: Weight,
    source: usize,
    target: usize,
}

impl Ord for EdgeState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap; ties go to the lower target, then the lower source
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.target.cmp(&self.target))
            .then_with(|| other.source.cmp(&self.source))
    }
}

impl PartialOrd for EdgeState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's Algorithm for Minimum Spanning Tree
///
/// Grows the tree from `start`, so a disconnected graph yields the tree of
/// `start`'s component only. `visit(source, target, weight)` is called for each
/// tree edge in the order it joins the tree.
/// Returns `None` if `start` is out of range.
pub fn prim_mst<F>(view: &GraphView, start: usize, mut visit: F) -> Option<MSTResult>
where
    F: FnMut(usize, usize, Weight),
{
    if start >= view.node_count {
        return None;
    }

    let mut visited = vec![false; view.node_count];
    let mut heap = BinaryHeap::new();
    let mut result = MSTResult::default();

    visited[start] = true;
    add_edges(view, start, &mut heap, &visited);

    while let Some(EdgeState { weight, source, target }) = heap.pop() {
        if visited[target] {
            continue;
        }

        visited[target] = true;
        visit(source, target, weight);
        result.edges.push((source, target, weight));
        result.total_weight = result.total_weight.saturating_add(weight);

        add_edges(view, target, &mut heap, &visited);
    }

    Some(result)
}

fn add_edges(view: &GraphView, u: usize, heap: &mut BinaryHeap<EdgeState>, visited: &[bool]) {
    for (v, weight) in view.neighbors(u) {
        if !visited[v] {
            heap.push(EdgeState { weight, source: u, target: v });
        }
    }
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    /// Merge the sets of `i` and `j`; false if they were already one set
    fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        match self.rank[root_i].cmp(&self.rank[root_j]) {
            Ordering::Less => self.parent[root_i] = root_j,
            Ordering::Greater => self.parent[root_j] = root_i,
            Ordering::Equal => {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
        true
    }
}

/// Kruskal's Algorithm for Minimum Spanning Forest
///
/// A mirrored pair (u, v) / (v, u) counts once, as the record discovered first.
/// Logical edges are stably sorted by weight, so equal weights keep discovery
/// order. Spans every component of the graph.
/// Returns `None` for an empty view.
pub fn kruskal_mst<F>(view: &GraphView, mut visit: F) -> Option<MSTResult>
where
    F: FnMut(usize, usize, Weight),
{
    if view.node_count == 0 {
        return None;
    }

    let mut seen = HashSet::with_capacity(view.edges.len() / 2);
    let mut candidates: Vec<(usize, usize, Weight)> = view
        .edges
        .iter()
        .copied()
        .filter(|&(u, v, _)| seen.insert((u.min(v), u.max(v))))
        .collect();
    candidates.sort_by_key(|&(_, _, weight)| weight);

    let mut uf = UnionFind::new(view.node_count);
    let mut result = MSTResult::default();

    for (u, v, weight) in candidates {
        if result.edges.len() + 1 == view.node_count {
            break;
        }
        if uf.union(u, v) {
            visit(u, v, weight);
            result.edges.push((u, v, weight));
            result.total_weight = result.total_weight.saturating_add(weight);
        }
    }

    Some(result)
}
