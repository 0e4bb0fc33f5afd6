//! Shortest-path strategies
//!
//! Exactly two strategies share the `find_path` contract, so they are
//! modelled as a closed enum rather than trait objects.

pub mod dial;
pub mod dijkstra;
pub mod shared;

pub use dial::{dial_find_path, DialOptions};
pub use dijkstra::dijkstra_find_path;

use std::fmt;

use crate::config::SearchConfig;
use crate::error::{Result, RouteError};
use crate::graph::store::GraphStore;
use crate::graph::types::{NodeId, PathResult};

/// A selected shortest-path strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Binary-heap label-setting search with early exit on the target
    Dijkstra,
    /// Bucket-queue search for weights bounded by `DialOptions::max_weight`
    Dial(DialOptions),
}

impl Algorithm {
    /// Names accepted by [`Algorithm::from_name`]
    pub const NAMES: [&'static str; 2] = ["dijkstra", "dial"];

    /// Select a strategy by name; anything but `dijkstra` or `dial` is rejected
    pub fn from_name(name: &str, config: &SearchConfig) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "dial" => Ok(Algorithm::Dial(DialOptions::from(config))),
            _ => Err(RouteError::UnsupportedAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Canonical name, as recorded in metrics
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Dial(_) => "dial",
        }
    }

    /// Run the strategy over `graph`
    pub fn find_path(
        &self,
        graph: &GraphStore,
        source: NodeId,
        target: NodeId,
    ) -> Result<PathResult> {
        match self {
            Algorithm::Dijkstra => dijkstra_find_path(graph, source, target),
            Algorithm::Dial(opts) => dial_find_path(graph, source, target, opts),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
