//! Application context for CLI command execution.
//!
//! [`App`] loads a graph file once, applies the node filter and keeps the
//! configuration, so each command only has to query it.

use crate::config::Config;
use crate::error::{Error, Result};
use depscope_graph::{GraphDocument, LoadWarning, MappingOverrides, NodeFilter, filter_graph};
use depscope_graph::{Graph, Node};
use std::path::Path;
use tracing::{debug, info};

/// How to read and narrow the graph file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Property overrides for generic graphs
    pub mapping: MappingOverrides,
    /// Node filter applied after loading
    pub filter: NodeFilter,
}

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    graph: Graph,
    warnings: Vec<LoadWarning>,
    config: Config,
}

impl App {
    /// Load and filter the graph at `path`.
    pub fn load(path: &Path, options: &LoadOptions, config: Config) -> Result<Self> {
        let document = GraphDocument::from_path(path)?;
        info!(path = %path.display(), dialect = document.dialect(), "Loading graph");
        let loaded = document.into_graph(&options.mapping)?;
        Ok(Self::from_graph(loaded.graph, loaded.warnings, &options.filter, config))
    }

    /// Build the context from an already-loaded graph.
    pub fn from_graph(
        graph: Graph,
        warnings: Vec<LoadWarning>,
        filter: &NodeFilter,
        config: Config,
    ) -> Self {
        let graph = if filter.is_active() {
            let filtered = filter_graph(&graph, filter);
            debug!(
                before = graph.nodes.len(),
                after = filtered.nodes.len(),
                "Filtered graph"
            );
            filtered
        } else {
            graph
        };

        Self {
            graph,
            warnings,
            config,
        }
    }

    /// The (filtered) graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Warnings collected while loading.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up a node, failing with [`Error::NodeNotFound`].
    pub fn require_node(&self, id: &str) -> Result<&Node> {
        self.graph
            .node(id)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }
}
