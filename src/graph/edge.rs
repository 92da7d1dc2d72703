//! Edge records
//!
//! An edge is a directed, weighted link between two vertices. Undirected
//! graphs store each logical edge as two mirrored records.

use super::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    pub source: VertexId,

    /// Target vertex (edge goes TO this vertex)
    pub target: VertexId,

    /// Non-negative weight
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Edge { source, target, weight }
    }

    /// The record an undirected graph stores alongside this one
    pub fn mirrored(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }

    /// Ordered (source, target) key
    pub fn key(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }
}
