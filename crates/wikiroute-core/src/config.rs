//! Run configuration for wikiroute
//!
//! Configuration is read from `wikiroute.toml` in the working directory, or
//! from an explicit `--config` path. Every field has a default, so an absent
//! file behaves like an empty one.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, RouteError};

pub use types::{
    InputConfig, OutputConfig, RunConfig, SearchConfig, DEFAULT_BUCKET_LIMIT, DEFAULT_MAX_WEIGHT,
};

/// File name looked up in the working directory when no path is given
pub const CONFIG_FILE: &str = "wikiroute.toml";

impl RunConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RouteError::io_operation("read config", path.display(), e))?;
        let config: RunConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicit config file, or `wikiroute.toml` under `dir` if it exists
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using discovered config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
