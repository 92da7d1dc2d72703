//! Core graph engine
//!
//! This module implements the weighted graph data model with:
//! - Uniquely labeled vertices held in an arena
//! - Directed, weighted edges; undirected graphs store mirrored pairs
//! - At most one edge per ordered vertex pair, no self-loops

pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{GraphMode, Label, VertexId, Weight};
pub use vertex::{Adjacency, Vertex};
