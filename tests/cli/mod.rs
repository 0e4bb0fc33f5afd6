mod metrics;
mod path;
mod stats;
