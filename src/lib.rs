//! wgraph: an in-memory weighted graph engine
//!
//! Directed and undirected graphs over uniquely labeled vertices, with
//! depth-first and breadth-first traversal, Dijkstra shortest paths and
//! minimum spanning trees (Prim, Kruskal).
//!
//! # Architecture
//!
//! - [`graph`]: vertex arena, edge records and the [`GraphStore`] mutation/query API
//! - [`algo`]: adapter running the `wgraph-algorithms` crate over a dense
//!   snapshot of the store and mapping results back to labels
//! - [`loader`]: edge-list file ingestion
//! - [`config`]: YAML configuration
//!
//! ## Conventions
//!
//! - Refused mutations return `false` (or a [`GraphError`] from the `try_*` forms)
//!   and leave the graph unchanged.
//! - Unknown labels yield `None` or empty results, never errors.
//! - Visitors are plain closures called synchronously, in discovery order.
//!
//! ## Example Usage
//!
//! ```rust
//! use wgraph::GraphStore;
//!
//! let mut g = GraphStore::undirected();
//! g.connect("A", "B", 1);
//! g.connect("B", "C", 3);
//! g.connect("A", "C", 8);
//!
//! assert_eq!(g.edges_as_text("A").as_deref(), Some("B(1),C(8)"));
//! assert_eq!(g.dfs_order("A"), vec!["A", "B", "C"]);
//!
//! let paths = g.dijkstra("A");
//! assert_eq!(paths.distance("C"), Some(4));
//!
//! let mut tree = Vec::new();
//! let total = g.mst_prim("A", |from, to, w| tree.push(format!("{}{}:{}", from, to, w)));
//! assert_eq!(total, Some(4));
//! assert_eq!(tree, vec!["AB:1", "BC:3"]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod loader;

// Re-export main types for convenience
pub use algo::{ShortestPaths, SpanningTree};
pub use config::{ConfigError, GraphConfig};
pub use graph::{
    Adjacency, Edge, GraphError, GraphMode, GraphResult, GraphStore, Label, Vertex, VertexId, Weight,
};
pub use loader::{EdgeListLoader, LoadError, LoadReport, LoadResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
