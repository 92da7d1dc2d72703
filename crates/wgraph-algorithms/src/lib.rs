//! Graph algorithms for the wgraph engine
//!
//! Algorithms run over a dense [`GraphView`] snapshot and speak in dense
//! node indices; callers map indices back to their own identifiers.

pub mod common;
pub mod traversal;
pub mod pathfinding;
pub mod mst;

pub use common::{GraphView, Weight};
pub use traversal::{bfs, dfs};
pub use pathfinding::{dijkstra, ShortestPathTree};
pub use mst::{kruskal_mst, prim_mst, MSTResult};
