//! In-memory graph storage implementation
//!
//! Vertices live in an arena addressed by [`VertexId`]; adjacency lists and
//! edge records refer to vertices by index only. Edge records are kept in
//! discovery order.

use super::edge::Edge;
use super::types::{GraphMode, Label, VertexId, Weight};
use super::vertex::Vertex;
use crate::config::GraphConfig;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Reasons a mutation was refused. The graph is unchanged in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} already exists")]
    VertexAlreadyExists(Label),

    #[error("Vertex {0} cannot connect to itself")]
    SelfLoop(Label),

    #[error("Edge {0} -> {1} already exists")]
    DuplicateEdge(Label, Label),

    #[error("Edge {0} -> {1} not found")]
    EdgeNotFound(Label, Label),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory weighted graph
///
/// - vertices: arena, VertexId -> Vertex
/// - label_index: Label -> VertexId
/// - edges: (source, target) -> Edge, in discovery order
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Vertex arena; a VertexId is the position in this vector
    vertices: Vec<Vertex>,

    /// Label index for O(1) lookups
    label_index: FxHashMap<Label, VertexId>,

    /// Edge records keyed by ordered endpoint pair
    edges: IndexMap<(VertexId, VertexId), Edge>,

    /// Fixed at construction
    mode: GraphMode,
}

impl GraphStore {
    /// Create a new empty directed graph
    pub fn new() -> Self {
        Self::with_mode(GraphMode::Directed)
    }

    /// Create a new empty undirected graph
    pub fn undirected() -> Self {
        Self::with_mode(GraphMode::Undirected)
    }

    pub fn with_mode(mode: GraphMode) -> Self {
        GraphStore {
            vertices: Vec::new(),
            label_index: FxHashMap::default(),
            edges: IndexMap::new(),
            mode,
        }
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_mode(config.mode)
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    /// Add a vertex without edges
    pub fn try_add(&mut self, label: &str) -> GraphResult<VertexId> {
        if self.contains(label) {
            return Err(GraphError::VertexAlreadyExists(Label::new(label)));
        }
        Ok(self.insert_vertex(label))
    }

    /// Add a vertex; false if the label is already in the graph
    pub fn add(&mut self, label: &str) -> bool {
        self.try_add(label).is_ok()
    }

    /// Check if a vertex exists
    pub fn contains(&self, label: &str) -> bool {
        self.label_index.contains_key(label)
    }

    /// Arena index of a label
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.label_index.get(label).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    pub fn get_vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertex_id(label).and_then(|id| self.vertex(id))
    }

    pub fn label_of(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(|v| v.label.as_str())
    }

    /// Check if the directed edge from -> to exists
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Weight of the directed edge from -> to
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Weight> {
        let key = (self.vertex_id(from)?, self.vertex_id(to)?);
        self.edges.get(&key).map(|e| e.weight)
    }

    /// Connect two vertices, creating missing endpoints
    ///
    /// Refuses self-loops and any existing (from, to) edge whatever its weight.
    /// Undirected graphs insert the mirrored record in the same call; either
    /// both records are added or neither is.
    pub fn try_connect(&mut self, from: &str, to: &str, weight: Weight) -> GraphResult<()> {
        if from == to {
            return Err(GraphError::SelfLoop(Label::new(from)));
        }
        if self.contains_edge(from, to) || (!self.is_directed() && self.contains_edge(to, from)) {
            return Err(GraphError::DuplicateEdge(Label::new(from), Label::new(to)));
        }

        let source = self.ensure_vertex(from);
        let target = self.ensure_vertex(to);

        let edge = Edge::new(source, target, weight);
        self.insert_edge(edge);
        if !self.is_directed() {
            self.insert_edge(edge.mirrored());
        }

        debug!("Connected {} -> {} ({}), mode {}", from, to, weight, self.mode);
        Ok(())
    }

    /// Connect two vertices; false if the edge was refused
    pub fn connect(&mut self, from: &str, to: &str, weight: Weight) -> bool {
        self.try_connect(from, to, weight).is_ok()
    }

    /// Remove the edge from -> to (and its mirror in undirected graphs)
    ///
    /// Returns the removed weight.
    pub fn try_disconnect(&mut self, from: &str, to: &str) -> GraphResult<Weight> {
        if from == to {
            return Err(GraphError::SelfLoop(Label::new(from)));
        }
        let not_found = || GraphError::EdgeNotFound(Label::new(from), Label::new(to));

        let source = self.vertex_id(from).ok_or_else(not_found)?;
        let target = self.vertex_id(to).ok_or_else(not_found)?;
        let edge = self.remove_edge(source, target).ok_or_else(not_found)?;

        if !self.is_directed() {
            self.remove_edge(target, source);
        }

        debug!("Disconnected {} -> {}, mode {}", from, to, self.mode);
        Ok(edge.weight)
    }

    /// Disconnect two vertices; false if no such edge exists
    pub fn disconnect(&mut self, from: &str, to: &str) -> bool {
        self.try_disconnect(from, to).is_ok()
    }

    /// Get total number of vertices
    pub fn vertices_size(&self) -> usize {
        self.vertices.len()
    }

    /// Get total number of directed edge records
    pub fn edges_size(&self) -> usize {
        self.edges.len()
    }

    /// Out-degree of a vertex, `None` if the label is unknown
    pub fn vertex_degree(&self, label: &str) -> Option<usize> {
        self.get_vertex(label).map(Vertex::degree)
    }

    /// Outgoing edges rendered as `neighbor(weight)` sorted by neighbor label
    ///
    /// `None` if the label is unknown, `Some("")` if the vertex has no
    /// outgoing edges. A -3-> B, A -5-> C renders as `B(3),C(5)`.
    pub fn edges_as_text(&self, label: &str) -> Option<String> {
        let vertex = self.get_vertex(label)?;

        let mut entries: Vec<(&str, Weight)> = vertex
            .adjacency()
            .iter()
            .filter_map(|a| Some((self.label_of(a.target)?, a.weight)))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let rendered: Vec<String> = entries
            .iter()
            .map(|(neighbor, weight)| format!("{}({})", neighbor, weight))
            .collect();
        Some(rendered.join(","))
    }

    /// All labels in lexicographic order
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.vertices.iter().map(|v| v.label.as_str()).collect();
        labels.sort_unstable();
        labels
    }

    /// Vertices in arena (creation) order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Edge records in discovery order
    pub fn edge_records(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Edges as (from, to, weight) labels in discovery order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> {
        self.edges.values().filter_map(move |e| {
            Some((self.label_of(e.source)?, self.label_of(e.target)?, e.weight))
        })
    }

    /// Release every vertex and edge. The mode is kept.
    pub fn clear(&mut self) {
        info!(
            "Clearing graph with {} vertices and {} edges",
            self.vertices.len(),
            self.edges.len()
        );
        self.edges.clear();
        self.label_index.clear();
        self.vertices.clear();
    }

    fn insert_vertex(&mut self, label: &str) -> VertexId {
        let id = VertexId::new(self.vertices.len() as u64);
        let label = Label::new(label);
        self.label_index.insert(label.clone(), id);
        self.vertices.push(Vertex::new(id, label));
        debug!("Added vertex {} as {}", self.vertices[id.index()].label, id);
        id
    }

    fn ensure_vertex(&mut self, label: &str) -> VertexId {
        match self.vertex_id(label) {
            Some(id) => id,
            None => self.insert_vertex(label),
        }
    }

    fn insert_edge(&mut self, edge: Edge) {
        self.vertices[edge.source.index()].push_adjacent(edge.target, edge.weight);
        self.edges.insert(edge.key(), edge);
    }

    fn remove_edge(&mut self, source: VertexId, target: VertexId) -> Option<Edge> {
        // shift_remove keeps the discovery order of the remaining records
        let edge = self.edges.shift_remove(&(source, target))?;
        self.vertices[source.index()].remove_adjacent(target);
        Some(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> GraphStore {
        let mut g = GraphStore::new();
        for label in ["a", "b", "c", "d", "e"] {
            assert!(g.add(label));
        }
        assert!(g.connect("a", "b", 10));
        assert!(g.connect("a", "d", 40));
        assert!(g.connect("a", "c", 20));
        g
    }

    #[test]
    fn test_add_and_contains() {
        let mut g = GraphStore::new();
        assert!(!g.contains("a"));
        assert!(g.add("a"));
        assert!(g.contains("a"));
        assert!(!g.add("a"));
        assert_eq!(g.vertices_size(), 1);
        assert_eq!(
            g.try_add("a"),
            Err(GraphError::VertexAlreadyExists(Label::new("a")))
        );
    }

    #[test]
    fn test_basic_graph() {
        let mut g = abcd();
        assert!(!g.connect("a", "b", 50));
        assert!(!g.connect("a", "a", 1));

        assert_eq!(g.vertices_size(), 5);
        assert_eq!(g.edges_size(), 3);
        assert_eq!(g.vertex_degree("a"), Some(3));
        assert_eq!(g.vertex_degree("c"), Some(0));
        assert_eq!(g.vertex_degree("xxx"), None);
        assert!(!g.contains("xxx"));
        assert_eq!(g.edge_weight("a", "b"), Some(10));
    }

    #[test]
    fn test_edges_as_text_sorted_by_neighbor() {
        let g = abcd();
        assert_eq!(g.edges_as_text("a").as_deref(), Some("b(10),c(20),d(40)"));
        assert_eq!(g.edges_as_text("c").as_deref(), Some(""));
        assert_eq!(g.edges_as_text("xxx"), None);
    }

    #[test]
    fn test_disconnect() {
        let mut g = abcd();
        assert!(!g.disconnect("a", "e"));
        assert!(!g.disconnect("a", "a"));
        assert!(!g.disconnect("zz", "a"));
        assert_eq!(g.edges_size(), 3);

        assert_eq!(g.try_disconnect("a", "c"), Ok(20));
        assert_eq!(g.edges_size(), 2);
        assert_eq!(g.vertex_degree("a"), Some(2));
        assert_eq!(g.edges_as_text("a").as_deref(), Some("b(10),d(40)"));
        assert_eq!(
            g.try_disconnect("a", "c"),
            Err(GraphError::EdgeNotFound(Label::new("a"), Label::new("c")))
        );
    }

    #[test]
    fn test_connect_creates_vertices() {
        let mut g = GraphStore::new();
        assert!(g.connect("x", "y", 0));
        assert!(g.contains("x") && g.contains("y"));
        assert_eq!(g.vertices_size(), 2);
        // Directed: the reverse edge is a different edge
        assert!(g.connect("y", "x", 4));
        assert_eq!(g.edges_size(), 2);
    }

    #[test]
    fn test_refused_connect_leaves_graph_unchanged() {
        let mut g = GraphStore::new();
        assert_eq!(g.try_connect("p", "p", 1), Err(GraphError::SelfLoop(Label::new("p"))));
        assert_eq!(g.vertices_size(), 0);

        g.connect("p", "q", 1);
        assert_eq!(
            g.try_connect("p", "q", 9),
            Err(GraphError::DuplicateEdge(Label::new("p"), Label::new("q")))
        );
        assert_eq!(g.edge_weight("p", "q"), Some(1));
    }

    #[test]
    fn test_undirected_mirrors_edges() {
        let mut g = GraphStore::undirected();
        assert!(g.connect("a", "b", 1));
        assert_eq!(g.edges_size(), 2);
        assert_eq!(g.edge_weight("b", "a"), Some(1));
        assert_eq!(g.vertex_degree("b"), Some(1));

        // The mirror counts as the same logical edge
        assert!(!g.connect("b", "a", 5));
        assert_eq!(g.edges_size(), 2);

        assert!(g.connect("b", "c", 3));
        assert!(g.disconnect("b", "a"));
        assert_eq!(g.edges_size(), 2);
        assert!(!g.contains_edge("a", "b"));
        assert_eq!(g.vertex_degree("a"), Some(0));
        assert_eq!(g.vertex_degree("b"), Some(1));
    }

    #[test]
    fn test_edges_keep_discovery_order() {
        let mut g = GraphStore::new();
        g.connect("c", "a", 3);
        g.connect("a", "b", 1);
        g.connect("b", "c", 2);
        g.disconnect("a", "b");
        g.connect("a", "b", 7);

        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![("c", "a", 3), ("b", "c", 2), ("a", "b", 7)]);
        assert_eq!(g.labels(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphStore>();
    }

    #[test]
    fn test_clear() {
        let mut g = GraphStore::undirected();
        g.connect("a", "b", 1);
        g.clear();
        assert_eq!(g.vertices_size(), 0);
        assert_eq!(g.edges_size(), 0);
        assert!(!g.contains("a"));
        assert_eq!(g.mode(), GraphMode::Undirected);

        assert!(g.connect("a", "b", 2));
        assert_eq!(g.vertex_id("a"), Some(VertexId::new(0)));
    }
}
