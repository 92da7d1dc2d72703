//! Vertex implementation
//!
//! A vertex owns its outgoing adjacency list. Entries refer to neighbors by
//! arena index, so vertices never hold references to each other.

use super::types::{Label, VertexId, Weight};
use serde::{Deserialize, Serialize};

/// One outgoing adjacency entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    pub target: VertexId,
    pub weight: Weight,
}

/// A labeled vertex with its outgoing edges in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Arena index of this vertex
    pub id: VertexId,

    /// Unique label
    pub label: Label,

    /// Outgoing edges, in insertion order
    adjacency: Vec<Adjacency>,
}

impl Vertex {
    pub fn new(id: VertexId, label: impl Into<Label>) -> Self {
        Vertex {
            id,
            label: label.into(),
            adjacency: Vec::new(),
        }
    }

    /// Out-degree
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn adjacency(&self) -> &[Adjacency] {
        &self.adjacency
    }

    pub(crate) fn push_adjacent(&mut self, target: VertexId, weight: Weight) {
        self.adjacency.push(Adjacency { target, weight });
    }

    /// Remove the entry pointing at `target`, keeping the order of the rest
    pub(crate) fn remove_adjacent(&mut self, target: VertexId) -> Option<Adjacency> {
        let pos = self.adjacency.iter().position(|a| a.target == target)?;
        Some(self.adjacency.remove(pos))
    }
}
