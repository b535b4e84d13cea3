//! Text filter producing a sub-graph.

use crate::model::{Graph, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Filter applied to nodes before analysis or display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeFilter {
    /// Case-insensitive substring to look for
    pub text: String,
    /// Keep matching nodes when true, drop them when false
    pub include_mode: bool,
    /// Match declaration names instead of the node path
    pub filter_declarations: bool,
}

impl Default for NodeFilter {
    fn default() -> Self {
        Self {
            text: String::new(),
            include_mode: true,
            filter_declarations: false,
        }
    }
}

impl NodeFilter {
    /// Include-mode path filter for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Whether the filter changes anything.
    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty()
    }

    fn matches(&self, node: &Node, needle: &str) -> bool {
        if self.filter_declarations {
            node.declarations
                .iter()
                .any(|decl| decl.name.to_lowercase().contains(needle))
        } else {
            node.path.to_lowercase().contains(needle)
        }
    }

    /// Whether `node` survives the filter.
    pub fn keeps(&self, node: &Node) -> bool {
        if !self.is_active() {
            return true;
        }
        self.matches(node, &self.text.to_lowercase()) == self.include_mode
    }
}

/// Apply a node filter, keeping only links whose endpoints both survive.
///
/// An inactive filter returns a copy of the graph unchanged.
pub fn filter_graph(graph: &Graph, filter: &NodeFilter) -> Graph {
    if !filter.is_active() {
        return graph.clone();
    }

    let nodes: Vec<Node> = graph
        .nodes
        .iter()
        .filter(|node| filter.keeps(node))
        .cloned()
        .collect();
    let kept: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let links = graph
        .links
        .iter()
        .filter(|link| kept.contains(link.source_id()) && kept.contains(link.target_id()))
        .cloned()
        .collect();

    let filtered = Graph::new(nodes, links);
    debug!(
        text = %filter.text,
        nodes = filtered.nodes.len(),
        links = filtered.links.len(),
        "Applied node filter"
    );
    filtered
}
