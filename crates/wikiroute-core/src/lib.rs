//! WikiRoute Core Library
//!
//! Graph storage, the Dijkstra and Dial shortest-path strategies, and the
//! metrics, result and configuration plumbing around a single query.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod metrics;
pub mod results;
pub mod titles;
