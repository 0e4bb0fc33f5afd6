//! Bookkeeping shared by the shortest-path strategies

use std::collections::HashMap;

use crate::bail_invariant;
use crate::error::Result;
use crate::graph::types::{Cost, Edge, NodeId, PathResult};

/// Per-query distance and predecessor maps plus the extraction counter.
///
/// A node without a distance entry is at infinite distance, whether or not
/// it is a source key of the graph.
#[derive(Debug)]
pub struct SearchState {
    dist: HashMap<NodeId, Cost>,
    prev: HashMap<NodeId, NodeId>,
    nodes_visited: u64,
}

impl SearchState {
    pub fn new(source: NodeId) -> Self {
        let mut dist = HashMap::new();
        dist.insert(source, 0);
        Self {
            dist,
            prev: HashMap::new(),
            nodes_visited: 0,
        }
    }

    pub fn distance(&self, node: NodeId) -> Option<Cost> {
        self.dist.get(&node).copied()
    }

    pub fn record_visit(&mut self) {
        self.nodes_visited += 1;
    }

    /// Relax `from -> edge.target`, returning the new distance on strict improvement.
    pub fn relax(&mut self, from: NodeId, from_cost: Cost, edge: &Edge) -> Result<Option<Cost>> {
        if edge.weight < 0 {
            bail_invariant!(
                "negative edge weight {} on {} -> {}",
                edge.weight,
                from,
                edge.target
            );
        }
        let Some(candidate) = from_cost.checked_add(edge.weight) else {
            bail_invariant!("path cost overflow at {} -> {}", from, edge.target);
        };

        let improves = self
            .distance(edge.target)
            .is_none_or(|current| candidate < current);
        if !improves {
            return Ok(None);
        }

        self.dist.insert(edge.target, candidate);
        self.prev.insert(edge.target, from);
        Ok(Some(candidate))
    }

    /// Walk predecessors back from `target` and package the query outcome.
    pub fn into_result(self, source: NodeId, target: NodeId) -> Result<PathResult> {
        let path = self.reconstruct_path(source, target)?;
        let distance = if path.is_empty() {
            None
        } else {
            self.distance(target)
        };
        Ok(PathResult {
            path,
            nodes_visited: self.nodes_visited,
            distance,
        })
    }

    fn reconstruct_path(&self, source: NodeId, target: NodeId) -> Result<Vec<NodeId>> {
        if self.distance(target).is_none() {
            return Ok(Vec::new());
        }

        let mut path = Vec::new();
        let mut at = target;
        while let Some(&before) = self.prev.get(&at) {
            path.push(at);
            if path.len() > self.prev.len() {
                bail_invariant!("predecessor cycle through node {}", at);
            }
            at = before;
        }
        path.push(source);
        path.reverse();
        Ok(path)
    }
}
