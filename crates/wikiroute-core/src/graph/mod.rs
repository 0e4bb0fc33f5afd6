//! Graph storage and shortest-path search
//!
//! - [`GraphStore`]: adjacency lists loaded once from an edge-list file
//! - [`Algorithm`]: Dijkstra or Dial over a shared search state

pub mod algos;
pub mod store;
pub mod types;

pub use algos::{Algorithm, DialOptions};
pub use store::GraphStore;
pub use types::{Cost, Edge, NodeId, PathResult, Weight};
