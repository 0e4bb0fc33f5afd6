//! Adjacency-list graph loaded from `from,to,weight` edge lists
//!
//! The store is populated once and is read-only afterward. Only nodes that
//! appear as the source of at least one edge become keys; sink-only nodes are
//! reachable through edges but are not counted by [`GraphStore::node_count`].

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::{Result, RouteError};
use crate::graph::types::{Edge, NodeId, Weight};

/// Weighted directed multigraph keyed by source node
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl GraphStore {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an edge-list file with the lenient or strict loader
    pub fn open(path: &Path, strict: bool) -> Result<Self> {
        let file =
            File::open(path).map_err(|e| RouteError::io_operation("open graph", path.display(), e))?;
        let reader = BufReader::new(file);
        if strict {
            Self::load_strict(reader)
        } else {
            Self::load(reader)
        }
    }

    /// Load edges without validation.
    ///
    /// Each of the three comma-separated fields is read as its leading
    /// integer; missing or non-numeric fields become `0`. Blank lines are
    /// skipped. Only I/O failures are reported.
    #[tracing::instrument(skip(reader))]
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let start = Instant::now();
        let mut graph = Self::new();
        let mut lenient_lines = 0usize;

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if parse_record(&line).is_none() {
                lenient_lines += 1;
            }
            let (from, to, weight) = parse_record_lenient(&line);
            graph.push_edge(from, to, weight);
        }

        if lenient_lines > 0 {
            tracing::warn!(
                lines = lenient_lines,
                "malformed edge records loaded with defaulted fields"
            );
        }
        crate::trace_time!(
            start,
            "load_graph",
            nodes = graph.node_count(),
            edges = graph.edge_count()
        );
        Ok(graph)
    }

    /// Load edges, failing on the first record that is not three integers
    #[tracing::instrument(skip(reader))]
    pub fn load_strict<R: BufRead>(reader: R) -> Result<Self> {
        let start = Instant::now();
        let mut graph = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (from, to, weight) =
                parse_record(&line).ok_or_else(|| RouteError::MalformedRecord {
                    line: index + 1,
                    content: line.clone(),
                })?;
            graph.push_edge(from, to, weight);
        }

        crate::trace_time!(
            start,
            "load_graph_strict",
            nodes = graph.node_count(),
            edges = graph.edge_count()
        );
        Ok(graph)
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge::new(to, weight));
    }

    /// Outgoing edges of `node` in insertion order; empty if it is not a source key
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `node` has at least one outgoing edge
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of distinct source keys
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges across all keys
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Smallest and largest edge weight, `None` for a graph without edges
    pub fn weight_bounds(&self) -> Option<(Weight, Weight)> {
        self.adjacency
            .values()
            .flatten()
            .fold(None, |bounds, edge| match bounds {
                None => Some((edge.weight, edge.weight)),
                Some((lo, hi)) => Some((lo.min(edge.weight), hi.max(edge.weight))),
            })
    }
}

impl FromIterator<(NodeId, NodeId, Weight)> for GraphStore {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId, Weight)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in iter {
            graph.push_edge(from, to, weight);
        }
        graph
    }
}

/// Parse `from,to,weight` exactly, tolerating surrounding whitespace
fn parse_record(line: &str) -> Option<(NodeId, NodeId, Weight)> {
    let mut fields = line.split(',').map(str::trim);
    let from = fields.next()?.parse().ok()?;
    let to = fields.next()?.parse().ok()?;
    let weight = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((from, to, weight))
}

fn parse_record_lenient(line: &str) -> (NodeId, NodeId, Weight) {
    let mut fields = line.split(',');
    let from = leading_integer(fields.next());
    let to = leading_integer(fields.next());
    let weight = leading_integer(fields.next());
    (from, to, weight)
}

/// Leading `[+-]?[0-9]+` of a field, or 0 when absent or out of range
fn leading_integer(field: Option<&str>) -> i64 {
    let Some(field) = field else {
        return 0;
    };
    let field = field.trim_start();
    let bytes = field.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return 0;
    }
    field[..sign + digits].parse().unwrap_or(0)
}
