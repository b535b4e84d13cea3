//! Configuration management for depscope.
//!
//! Settings live in an optional YAML file. Without `--config`, a
//! `depscope.yaml` in the current directory is used when present; otherwise
//! the built-in defaults apply. Every section and key is optional.
//!
//! ```yaml
//! analysis:
//!   min_component_for_communities: 6
//!   hub_fraction: 0.1
//! search:
//!   max_results: 20
//! neighbors:
//!   depth: 1
//! ```

use crate::error::{Error, Result};
use depscope_graph::AnalysisConfig;
use depscope_graph::search::DEFAULT_MAX_RESULTS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "depscope.yaml";

/// Default hop count for the `neighbors` command.
pub const DEFAULT_NEIGHBOR_DEPTH: i64 = 1;

/// Search section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Cap on search hits
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Neighbourhood section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NeighborsConfig {
    /// Hops from the seed node
    pub depth: i64,
}

impl Default for NeighborsConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_NEIGHBOR_DEPTH,
        }
    }
}

/// Configuration for depscope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Analysis thresholds
    pub analysis: AnalysisConfig,
    /// Search settings
    pub search: SearchConfig,
    /// Neighbourhood settings
    pub neighbors: NeighborsConfig,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load the explicit file if given, else `depscope.yaml` in `dir` if it
    /// exists, else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
