//! Structural analysis of a dependency graph.
//!
//! [`analyze_graph_structure`] is the entry point: it builds the adjacency
//! index once and derives components, communities, hubs, isolated nodes and
//! whole-graph metrics from it. Every result is recomputed in full on each
//! call; nothing is cached between calls.

mod adjacency;
mod cluster;
mod communities;
mod components;
mod hubs;
mod metrics;
mod naming;
mod summary;

pub use adjacency::{AdjacencyIndex, build_adjacency};
pub use cluster::ClusterInfo;
pub use communities::{find_communities, neighbor_similarity};
pub use components::find_connected_components;
pub use hubs::{HubNode, find_hub_nodes, find_isolated_nodes, hub_count};
pub use metrics::{average_degree, graph_density};
pub use naming::{GENERAL_COMMUNITY, community_name, extract_words, slugify};
pub use summary::insights_summary;

use crate::config::AnalysisConfig;
use crate::model::Graph;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The node with the highest degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostConnected {
    /// Node id
    pub id: String,
    /// Number of distinct neighbours
    pub degree: usize,
}

/// Structural report for a graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphInsights {
    /// Number of nodes in the input
    pub total_nodes: usize,
    /// Number of raw links in the input, dangling ones included
    pub total_links: usize,
    /// Components by descending size
    pub connected_components: Vec<ClusterInfo>,
    /// Communities of the largest component by descending size
    pub communities: Vec<ClusterInfo>,
    /// Nodes without neighbours, in input order
    pub isolated_nodes: Vec<String>,
    /// Most connected nodes by descending degree
    pub hub_nodes: Vec<HubNode>,
    /// `2 * links / nodes`, rounded to 2 decimals
    pub average_degree: f64,
    /// `links / C(nodes, 2)`, rounded to 3 decimals
    pub density: f64,
    /// First component of maximum size
    pub largest_component: Option<ClusterInfo>,
    /// Top hub
    pub most_connected_node: Option<MostConnected>,
}

/// Analyze a graph with the default thresholds.
pub fn analyze_graph_structure(graph: &Graph) -> GraphInsights {
    analyze_graph_structure_with(graph, &AnalysisConfig::default())
}

/// Analyze a graph with explicit thresholds.
///
/// A graph without nodes yields the empty report.
pub fn analyze_graph_structure_with(graph: &Graph, config: &AnalysisConfig) -> GraphInsights {
    if graph.nodes.is_empty() {
        return GraphInsights::default();
    }

    let adjacency = build_adjacency(&graph.nodes, &graph.links);

    let connected_components = find_connected_components(&graph.nodes, &adjacency);
    let communities = find_communities(graph, &adjacency, config);
    let isolated_nodes = find_isolated_nodes(&graph.nodes, &adjacency);
    let hub_nodes = find_hub_nodes(&adjacency, config);

    let total_nodes = graph.nodes.len();
    let total_links = graph.links.len();

    // Components are sorted by descending size, so the first is the largest.
    let largest_component = connected_components.first().cloned();
    let most_connected_node = hub_nodes.first().map(|hub| MostConnected {
        id: hub.id.clone(),
        degree: hub.degree,
    });

    debug!(
        nodes = total_nodes,
        links = total_links,
        components = connected_components.len(),
        communities = communities.len(),
        hubs = hub_nodes.len(),
        isolated = isolated_nodes.len(),
        "Analyzed graph structure"
    );

    GraphInsights {
        total_nodes,
        total_links,
        average_degree: average_degree(total_nodes, total_links),
        density: graph_density(total_nodes, total_links),
        connected_components,
        communities,
        isolated_nodes,
        hub_nodes,
        largest_component,
        most_connected_node,
    }
}
