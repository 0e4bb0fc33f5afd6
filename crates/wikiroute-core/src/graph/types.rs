use serde::Serialize;

/// Integer node identifier
pub type NodeId = i64;

/// Edge weight as read from the input; negative values survive lenient loading
pub type Weight = i64;

/// Accumulated path cost
pub type Cost = i64;

/// A directed, weighted connection to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(target: NodeId, weight: Weight) -> Self {
        Self { target, weight }
    }
}

/// Outcome of a single shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Nodes from source to target inclusive; empty when unreachable
    pub path: Vec<NodeId>,
    /// Queue or bucket extractions performed, stale duplicates included
    pub nodes_visited: u64,
    /// Shortest distance to the target, `None` when unreachable
    pub distance: Option<Cost>,
}

impl PathResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path length in edges, or `-1` when no path was found
    pub fn path_length(&self) -> i64 {
        if self.path.is_empty() {
            -1
        } else {
            self.path.len() as i64 - 1
        }
    }
}
