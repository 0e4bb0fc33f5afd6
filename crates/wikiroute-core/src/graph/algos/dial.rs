use crate::bail_invariant;
use crate::config::SearchConfig;
use crate::error::{Result, RouteError};
use crate::graph::algos::shared::SearchState;
use crate::graph::store::GraphStore;
use crate::graph::types::{NodeId, PathResult, Weight};
use std::collections::VecDeque;

/// Bounds for the bucket queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialOptions {
    /// Caller-asserted upper bound on every edge weight
    pub max_weight: Weight,
    /// Largest bucket array the search may allocate
    pub bucket_limit: usize,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for DialOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            max_weight: config.max_weight,
            bucket_limit: config.bucket_limit,
        }
    }
}

/// Check that every edge weight lies in `[0, max_weight]`
fn check_weight_bounds(graph: &GraphStore, max_weight: Weight) -> Result<()> {
    if max_weight < 0 {
        bail_invariant!("max weight must be non-negative, got {}", max_weight);
    }
    if let Some((lo, hi)) = graph.weight_bounds() {
        if lo < 0 || hi > max_weight {
            bail_invariant!(
                "edge weights span [{}, {}] but the bucket queue requires [0, {}]",
                lo,
                hi,
                max_weight
            );
        }
    }
    Ok(())
}

/// Number of buckets needed to hold every attainable distance.
///
/// A shortest path has at most `node_count` edges of weight at most
/// `max_weight`, so distances lie in `0..=max_weight * node_count`.
pub fn bucket_count(node_count: usize, opts: &DialOptions) -> Result<usize> {
    let count = usize::try_from(opts.max_weight)
        .ok()
        .and_then(|w| w.checked_mul(node_count))
        .and_then(|span| span.checked_add(1))
        .ok_or_else(|| {
            RouteError::invariant(format!(
                "bucket count overflows for max weight {} and {} nodes",
                opts.max_weight, node_count
            ))
        })?;
    if count > opts.bucket_limit {
        bail_invariant!(
            "bucket queue needs {} buckets, limit is {}",
            count,
            opts.bucket_limit
        );
    }
    Ok(count)
}

/// Bucket-queue shortest path from `source` to `target`.
///
/// The scan pointer only moves forward and each bucket is drained in FIFO
/// order. Unlike Dijkstra there is no early exit on `target`: the scan runs
/// until every bucket is empty.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dial_find_path(
    graph: &GraphStore,
    source: NodeId,
    target: NodeId,
    opts: &DialOptions,
) -> Result<PathResult> {
    check_weight_bounds(graph, opts.max_weight)?;
    let mut buckets: Vec<VecDeque<NodeId>> =
        vec![VecDeque::new(); bucket_count(graph.node_count(), opts)?];
    tracing::debug!(buckets = buckets.len(), "allocated bucket queue");

    let mut state = SearchState::new(source);
    buckets[0].push_back(source);
    let mut idx = 0usize;

    loop {
        while idx < buckets.len() && buckets[idx].is_empty() {
            idx += 1;
        }
        let Some(node) = buckets.get_mut(idx).and_then(VecDeque::pop_front) else {
            break;
        };
        state.record_visit();

        let Some(cost) = state.distance(node) else {
            continue;
        };
        for edge in graph.neighbors(node) {
            if let Some(next_cost) = state.relax(node, cost, edge)? {
                let slot = usize::try_from(next_cost)
                    .ok()
                    .filter(|&slot| slot >= idx)
                    .and_then(|slot| buckets.get_mut(slot));
                let Some(bucket) = slot else {
                    bail_invariant!(
                        "distance {} of node {} falls outside buckets {}..{}",
                        next_cost,
                        edge.target,
                        idx,
                        buckets.len()
                    );
                };
                bucket.push_back(edge.target);
            }
        }
    }

    let result = state.into_result(source, target)?;
    tracing::debug!(
        nodes_visited = result.nodes_visited,
        found = result.found(),
        "dial finished"
    );
    Ok(result)
}
