pub mod dispatch;
pub mod metrics;
pub mod path;
pub mod stats;
