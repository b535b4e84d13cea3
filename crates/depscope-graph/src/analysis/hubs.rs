//! Hub and isolated-node detection.

use super::adjacency::AdjacencyIndex;
use crate::config::AnalysisConfig;
use crate::model::Node;
use serde::{Deserialize, Serialize};

/// A highly connected node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubNode {
    /// Node id
    pub id: String,
    /// Number of distinct neighbours
    pub degree: usize,
    /// Neighbour ids in adjacency order
    pub connections: Vec<String>,
}

/// Number of hubs to report for `connected` nodes with at least one neighbour.
///
/// `min(max_hubs, ceil(hub_fraction * connected))`
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn hub_count(connected: usize, config: &AnalysisConfig) -> usize {
    let share = (connected as f64 * config.hub_fraction).ceil().max(0.0) as usize;
    share.min(config.max_hubs)
}

/// Find the most connected nodes.
///
/// Candidates come from the adjacency index, so a repeated node id counts
/// once. Only nodes with at least one neighbour qualify. Results are ordered
/// by descending degree; ties keep input order.
pub fn find_hub_nodes(adjacency: &AdjacencyIndex<'_>, config: &AnalysisConfig) -> Vec<HubNode> {
    let mut candidates: Vec<(&str, usize)> = adjacency
        .node_ids()
        .map(|id| (id, adjacency.degree(id)))
        .filter(|(_, degree)| *degree > 0)
        .collect();

    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    let take = hub_count(candidates.len(), config);

    candidates
        .into_iter()
        .take(take)
        .map(|(id, degree)| HubNode {
            id: id.to_string(),
            degree,
            connections: adjacency.neighbors(id).map(str::to_string).collect(),
        })
        .collect()
}

/// Ids of nodes with no neighbours, in input order.
pub fn find_isolated_nodes(nodes: &[Node], adjacency: &AdjacencyIndex<'_>) -> Vec<String> {
    nodes
        .iter()
        .filter(|node| adjacency.degree(&node.id) == 0)
        .map(|node| node.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::build_adjacency;
    use crate::model::Link;
    use rstest::rstest;

    #[rstest]
    #[case::none(0, 0)]
    #[case::one(1, 1)]
    #[case::rounds_up(11, 2)]
    #[case::quarter_hundred(25, 3)]
    #[case::capped(500, 10)]
    fn hub_count_cases(#[case] connected: usize, #[case] expected: usize) {
        assert_eq!(hub_count(connected, &AnalysisConfig::default()), expected);
    }

    #[test]
    fn hubs_sorted_by_degree_then_input_order() {
        let nodes: Vec<Node> = ["a", "b", "c", "d", "e"].into_iter().map(Node::new).collect();
        let links = vec![
            Link::new("a", "b"),
            Link::new("c", "a"),
            Link::new("c", "b"),
            Link::new("c", "d"),
        ];
        let adjacency = build_adjacency(&nodes, &links);
        let config = AnalysisConfig {
            max_hubs: 3,
            hub_fraction: 1.0,
            ..AnalysisConfig::default()
        };

        let hubs = find_hub_nodes(&adjacency, &config);

        let ids: Vec<&str> = hubs.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(hubs[0].degree, 3);
        assert_eq!(hubs[0].connections, vec!["a", "b", "d"]);
    }

    #[test]
    fn isolated_nodes_keep_input_order() {
        let nodes: Vec<Node> = ["z", "a", "m"].into_iter().map(Node::new).collect();
        let links = vec![Link::new("a", "ghost")];
        let adjacency = build_adjacency(&nodes, &links);

        assert_eq!(find_isolated_nodes(&nodes, &adjacency), vec!["z", "a", "m"]);
        assert!(find_hub_nodes(&adjacency, &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn repeated_node_id_is_one_hub() {
        let nodes: Vec<Node> = ["a", "a", "b"].into_iter().map(Node::new).collect();
        let links = vec![Link::new("a", "b")];
        let adjacency = build_adjacency(&nodes, &links);
        let config = AnalysisConfig {
            hub_fraction: 1.0,
            ..AnalysisConfig::default()
        };

        let hubs = find_hub_nodes(&adjacency, &config);

        let ids: Vec<&str> = hubs.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(hubs[0].connections, vec!["b"]);
    }
}
