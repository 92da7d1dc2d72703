//! Graph configuration
//!
//! ```yaml
//! mode: undirected     # or: directed (default)
//! strict_load: true    # fail a load on self-loop/duplicate records (default: false)
//! ```

use crate::graph::{GraphMode, GraphStore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings applied when a graph is created and loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edge directionality of new graphs
    pub mode: GraphMode,
    /// Treat self-loop and duplicate records in edge-list files as errors
    pub strict_load: bool,
}

impl GraphConfig {
    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Create an empty graph with these settings
    pub fn build(&self) -> GraphStore {
        GraphStore::with_config(self)
    }
}
