//! Graph algorithms module
//!
//! Algorithms are implemented in the `wgraph-algorithms` crate over dense
//! indices. This module provides the integration/adapter layer: it snapshots
//! the store into a [`GraphView`] and maps results back to labels.
//!
//! Dense indices follow lexicographic label order, so wherever an algorithm
//! breaks ties by index it breaks them by label.

use crate::graph::{GraphStore, Vertex, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use wgraph_algorithms::{dijkstra, kruskal_mst, prim_mst, GraphView, MSTResult};

// Re-export algorithms
pub use wgraph_algorithms::{bfs, dfs, ShortestPathTree};

/// A [`GraphView`] together with the label of every dense index
pub struct LabeledView<'a> {
    pub view: GraphView,
    /// Sorted; position is the dense index
    labels: Vec<&'a str>,
}

impl<'a> LabeledView<'a> {
    pub fn label(&self, idx: usize) -> &'a str {
        self.labels[idx]
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.binary_search_by(|probe| (*probe).cmp(label)).ok()
    }
}

/// Build a GraphView from the store for algorithm execution
pub fn build_view(store: &GraphStore) -> LabeledView<'_> {
    // 1. Order vertices by label; that order defines dense indices
    let mut order: Vec<&Vertex> = store.vertices().collect();
    order.sort_unstable_by(|a, b| a.label.cmp(&b.label));

    let mut dense = vec![0usize; store.vertices_size()];
    for (idx, vertex) in order.iter().enumerate() {
        dense[vertex.id.index()] = idx;
    }

    // 2. Adjacency rows, keeping each vertex's insertion order
    let outgoing: Vec<Vec<(usize, Weight)>> = order
        .iter()
        .map(|v| {
            v.adjacency()
                .iter()
                .map(|a| (dense[a.target.index()], a.weight))
                .collect()
        })
        .collect();

    // 3. Edge records in discovery order
    let edges = store
        .edge_records()
        .map(|e| (dense[e.source.index()], dense[e.target.index()], e.weight))
        .collect();

    let labels = order.iter().map(|v| v.label.as_str()).collect();

    LabeledView {
        view: GraphView::from_parts(order.len(), outgoing, edges),
        labels,
    }
}

/// Single-source shortest paths keyed by label
///
/// The source itself appears in neither map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    /// Minimum total weight from the source
    pub distances: BTreeMap<String, Weight>,
    /// Vertex preceding each target on a shortest path
    pub predecessors: BTreeMap<String, String>,
}

impl ShortestPaths {
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distance(&self, label: &str) -> Option<Weight> {
        self.distances.get(label).copied()
    }

    /// Labels from the source to `target`, both ends included
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        self.distances.get(target)?;

        let mut path = vec![target.to_string()];
        let mut curr = target;
        while let Some(prev) = self.predecessors.get(curr) {
            path.push(prev.clone());
            curr = prev.as_str();
            if path.len() > self.predecessors.len() + 1 {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    pub fn into_parts(self) -> (BTreeMap<String, Weight>, BTreeMap<String, String>) {
        (self.distances, self.predecessors)
    }
}

/// Minimum spanning tree (or forest) keyed by label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub total_weight: Weight,
    /// (from, to, weight) in the order edges joined the tree
    pub edges: Vec<(String, String, Weight)>,
}

impl GraphStore {
    /// Depth-first traversal; `visit` sees each reachable label once, in discovery order
    ///
    /// Neighbors are explored in adjacency insertion order. Unknown start: no visits.
    pub fn dfs(&self, start: &str, mut visit: impl FnMut(&str)) {
        let lv = build_view(self);
        match lv.index_of(start) {
            Some(idx) => {
                dfs(&lv.view, idx, |i| visit(lv.label(i)));
            }
            None => debug!("dfs: unknown start vertex {}", start),
        }
    }

    /// Breadth-first traversal; `visit` sees each reachable label once, in discovery order
    pub fn bfs(&self, start: &str, mut visit: impl FnMut(&str)) {
        let lv = build_view(self);
        match lv.index_of(start) {
            Some(idx) => {
                bfs(&lv.view, idx, |i| visit(lv.label(i)));
            }
            None => debug!("bfs: unknown start vertex {}", start),
        }
    }

    pub fn dfs_order(&self, start: &str) -> Vec<String> {
        let mut order = Vec::new();
        self.dfs(start, |label| order.push(label.to_string()));
        order
    }

    pub fn bfs_order(&self, start: &str) -> Vec<String> {
        let mut order = Vec::new();
        self.bfs(start, |label| order.push(label.to_string()));
        order
    }

    /// Dijkstra's shortest paths from `start` to every reachable vertex
    ///
    /// Both maps are empty if `start` is unknown.
    pub fn dijkstra(&self, start: &str) -> ShortestPaths {
        let lv = build_view(self);
        let Some(tree) = lv.index_of(start).and_then(|idx| dijkstra(&lv.view, idx)) else {
            debug!("dijkstra: unknown start vertex {}", start);
            return ShortestPaths::default();
        };

        let mut paths = ShortestPaths::default();
        for idx in tree.reachable() {
            let label = lv.label(idx).to_string();
            if let Some(parent) = tree.parent(idx) {
                paths.predecessors.insert(label.clone(), lv.label(parent).to_string());
            }
            if let Some(distance) = tree.distance(idx) {
                paths.distances.insert(label, distance);
            }
        }
        paths
    }

    /// Prim's minimum spanning tree rooted at `start`
    ///
    /// Spans `start`'s connected component. `visit(from, to, weight)` is called
    /// per tree edge in the order edges join the tree. Returns the total tree
    /// weight, or `None` (without visits) if `start` is unknown or the graph
    /// is directed.
    pub fn mst_prim(&self, start: &str, mut visit: impl FnMut(&str, &str, Weight)) -> Option<Weight> {
        if !self.check_undirected("mst_prim") {
            return None;
        }
        let lv = build_view(self);
        let Some(idx) = lv.index_of(start) else {
            debug!("mst_prim: unknown start vertex {}", start);
            return None;
        };
        prim_mst(&lv.view, idx, |u, v, w| visit(lv.label(u), lv.label(v), w)).map(|r| r.total_weight)
    }

    /// Kruskal's minimum spanning forest over every component
    ///
    /// Logical edges are taken in ascending weight, ties in discovery order.
    /// Returns the total weight, or `None` (without visits) if the graph is
    /// empty or directed.
    pub fn mst_kruskal(&self, mut visit: impl FnMut(&str, &str, Weight)) -> Option<Weight> {
        if !self.check_undirected("mst_kruskal") {
            return None;
        }
        let lv = build_view(self);
        kruskal_mst(&lv.view, |u, v, w| visit(lv.label(u), lv.label(v), w)).map(|r| r.total_weight)
    }

    /// Prim's tree from `start`, collected instead of visited
    pub fn spanning_tree_prim(&self, start: &str) -> Option<SpanningTree> {
        if !self.check_undirected("spanning_tree_prim") {
            return None;
        }
        let lv = build_view(self);
        let idx = lv.index_of(start)?;
        prim_mst(&lv.view, idx, |_, _, _| {}).map(|r| labeled_tree(&lv, r))
    }

    /// Kruskal's forest, collected instead of visited
    pub fn spanning_tree_kruskal(&self) -> Option<SpanningTree> {
        if !self.check_undirected("spanning_tree_kruskal") {
            return None;
        }
        let lv = build_view(self);
        kruskal_mst(&lv.view, |_, _, _| {}).map(|r| labeled_tree(&lv, r))
    }

    fn check_undirected(&self, op: &str) -> bool {
        if self.is_directed() {
            warn!("{}: spanning trees require an undirected graph", op);
            return false;
        }
        true
    }
}

fn labeled_tree(lv: &LabeledView<'_>, result: MSTResult) -> SpanningTree {
    SpanningTree {
        total_weight: result.total_weight,
        edges: result
            .edges
            .into_iter()
            .map(|(u, v, w)| (lv.label(u).to_string(), lv.label(v).to_string(), w))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphMode;

    /// A -1-> B, B -3-> C, A -8-> C
    fn graph0(mode: GraphMode) -> GraphStore {
        let mut g = GraphStore::with_mode(mode);
        g.connect("A", "B", 1);
        g.connect("B", "C", 3);
        g.connect("A", "C", 8);
        g
    }

    fn prim_text(g: &GraphStore, start: &str) -> (Option<Weight>, String) {
        let mut out = String::new();
        let total = g.mst_prim(start, |from, to, w| out.push_str(&format!("[{}{} {}]", from, to, w)));
        (total, out)
    }

    #[test]
    fn test_build_view_orders_by_label() {
        let mut g = GraphStore::new();
        g.connect("zeta", "alpha", 2);
        g.connect("alpha", "mid", 5);

        let lv = build_view(&g);
        assert_eq!(lv.index_of("alpha"), Some(0));
        assert_eq!(lv.index_of("mid"), Some(1));
        assert_eq!(lv.index_of("zeta"), Some(2));
        assert_eq!(lv.index_of("nope"), None);
        assert_eq!(lv.view.successors(2), &[0]);
        assert_eq!(lv.view.edges, vec![(2, 0, 2), (0, 1, 5)]);
    }

    #[test]
    fn test_directed_traversals() {
        let g = graph0(GraphMode::Directed);
        assert_eq!(g.dfs_order("A"), vec!["A", "B", "C"]);
        assert_eq!(g.dfs_order("B"), vec!["B", "C"]);
        assert_eq!(g.dfs_order("C"), vec!["C"]);
        assert!(g.dfs_order("X").is_empty());
        assert_eq!(g.bfs_order("A"), vec!["A", "B", "C"]);
        assert!(g.bfs_order("X").is_empty());
    }

    #[test]
    fn test_undirected_traversals() {
        let g = graph0(GraphMode::Undirected);
        assert_eq!(g.bfs_order("A"), vec!["A", "B", "C"]);
        assert_eq!(g.dfs_order("B"), vec!["B", "A", "C"]);
        assert_eq!(g.dfs_order("C"), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_dijkstra() {
        let g = graph0(GraphMode::Directed);
        let paths = g.dijkstra("A");
        assert_eq!(paths.distance("B"), Some(1));
        assert_eq!(paths.distance("C"), Some(4));
        assert_eq!(paths.predecessors.get("C").map(String::as_str), Some("B"));
        assert_eq!(paths.path_to("C"), Some(vec!["A".into(), "B".into(), "C".into()]));
        assert!(!paths.distances.contains_key("A"));

        let (distances, predecessors) = g.dijkstra("B").into_parts();
        assert_eq!(distances.into_iter().collect::<Vec<_>>(), vec![("C".to_string(), 3)]);
        assert_eq!(predecessors.get("C").map(String::as_str), Some("B"));

        assert!(g.dijkstra("X").is_empty());
        assert!(g.dijkstra("X").predecessors.is_empty());
    }

    #[test]
    fn test_dijkstra_reports_max_weight_targets() {
        let mut g = GraphStore::new();
        g.connect("A", "B", Weight::MAX);
        g.connect("B", "C", 1);

        let paths = g.dijkstra("A");
        assert_eq!(paths.distance("B"), Some(Weight::MAX));
        assert_eq!(paths.distance("C"), Some(Weight::MAX));
        assert_eq!(paths.predecessors.get("C").map(String::as_str), Some("B"));
        assert_eq!(paths.path_to("C"), Some(vec!["A".into(), "B".into(), "C".into()]));
    }

    #[test]
    fn test_dijkstra_undirected() {
        let g = graph0(GraphMode::Undirected);
        let paths = g.dijkstra("B");
        assert_eq!(paths.distance("A"), Some(1));
        assert_eq!(paths.distance("C"), Some(3));
        assert_eq!(paths.predecessors.get("A").map(String::as_str), Some("B"));
        assert_eq!(paths.predecessors.get("C").map(String::as_str), Some("B"));
    }

    #[test]
    fn test_mst_prim() {
        let g = graph0(GraphMode::Undirected);
        assert_eq!(prim_text(&g, "A"), (Some(4), "[AB 1][BC 3]".to_string()));
        assert_eq!(prim_text(&g, "B"), (Some(4), "[BA 1][BC 3]".to_string()));
        assert_eq!(prim_text(&g, "C"), (Some(4), "[CB 3][BA 1]".to_string()));
        assert_eq!(prim_text(&g, "X"), (None, String::new()));
    }

    #[test]
    fn test_mst_kruskal() {
        let g = graph0(GraphMode::Undirected);
        let mut out = String::new();
        let total = g.mst_kruskal(|from, to, w| out.push_str(&format!("[{}{} {}]", from, to, w)));
        assert_eq!(total, Some(4));
        assert_eq!(out, "[AB 1][BC 3]");

        assert_eq!(GraphStore::undirected().mst_kruskal(|_, _, _| {}), None);
    }

    #[test]
    fn test_mst_rejects_directed_graph() {
        let g = graph0(GraphMode::Directed);
        let mut visits = 0;
        assert_eq!(g.mst_prim("A", |_, _, _| visits += 1), None);
        assert_eq!(g.mst_kruskal(|_, _, _| visits += 1), None);
        assert!(g.spanning_tree_kruskal().is_none());
        assert_eq!(visits, 0);
    }

    #[test]
    fn test_spanning_tree_collectors() {
        let mut g = graph0(GraphMode::Undirected);
        g.connect("D", "E", 2);

        let prim = g.spanning_tree_prim("C").unwrap();
        assert_eq!(prim.total_weight, 4);
        assert_eq!(
            prim.edges,
            vec![("C".to_string(), "B".to_string(), 3), ("B".to_string(), "A".to_string(), 1)]
        );

        // Kruskal covers the second component too
        let forest = g.spanning_tree_kruskal().unwrap();
        assert_eq!(forest.total_weight, 6);
        assert_eq!(forest.edges.len(), 3);
        assert!(g.spanning_tree_prim("X").is_none());
    }
}
