use crate::error::Result;
use crate::graph::algos::shared::SearchState;
use crate::graph::store::GraphStore;
use crate::graph::types::{Cost, NodeId, PathResult};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Min-heap entry ordered by `(cost, node)`: cheaper first, then lower id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub cost: Cost,
    pub node: NodeId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Label-setting shortest path from `source` to `target`.
///
/// Every extraction counts toward `nodes_visited`, stale entries included.
/// The search stops as soon as `target` is extracted.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dijkstra_find_path(graph: &GraphStore, source: NodeId, target: NodeId) -> Result<PathResult> {
    let mut state = SearchState::new(source);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        cost: 0,
        node: source,
    }));

    while let Some(Reverse(HeapEntry { cost, node })) = heap.pop() {
        state.record_visit();
        if node == target {
            break;
        }

        // Stale: a cheaper entry for this node was already processed
        let Some(best) = state.distance(node) else {
            continue;
        };
        if cost > best {
            continue;
        }

        for edge in graph.neighbors(node) {
            if let Some(next_cost) = state.relax(node, best, edge)? {
                heap.push(Reverse(HeapEntry {
                    cost: next_cost,
                    node: edge.target,
                }));
            }
        }
    }

    let result = state.into_result(source, target)?;
    tracing::debug!(
        nodes_visited = result.nodes_visited,
        found = result.found(),
        "dijkstra finished"
    );
    Ok(result)
}
