//! Heuristic community detection.
//!
//! Communities are grown greedily around seed nodes of the largest connected
//! component, using the overlap of neighbour sets as similarity. The result
//! depends on input order; it is a cheap local heuristic, not a modularity
//! optimizer.

use super::adjacency::AdjacencyIndex;
use super::cluster::ClusterInfo;
use super::components::component_members;
use super::naming::{community_name, slugify};
use crate::config::AnalysisConfig;
use crate::model::Graph;
use std::collections::HashSet;
use tracing::debug;

/// Neighbour-overlap similarity of two nodes.
///
/// `|N(a) ∩ N(b)| / max(|N(a)|, |N(b)|, 1)`
#[allow(clippy::cast_precision_loss)]
pub fn neighbor_similarity(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let common = a.intersection(b).count();
    let denominator = a.len().max(b.len()).max(1);
    common as f64 / denominator as f64
}

/// Detect communities inside the largest connected component.
///
/// Returns nothing when the largest component is smaller than
/// `config.min_component_for_communities`. Output is ordered by descending
/// size.
pub fn find_communities(
    graph: &Graph,
    adjacency: &AdjacencyIndex<'_>,
    config: &AnalysisConfig,
) -> Vec<ClusterInfo> {
    let mut components = component_members(&graph.nodes, adjacency);
    // Stable: the first component of maximum size is analysed.
    components.sort_by(|a, b| b.len().cmp(&a.len()));

    let Some(largest) = components.first() else {
        return Vec::new();
    };
    if largest.len() < config.min_component_for_communities {
        debug!(
            largest = largest.len(),
            minimum = config.min_component_for_communities,
            "Largest component too small for community detection"
        );
        return Vec::new();
    }

    let mut processed: HashSet<&str> = HashSet::with_capacity(largest.len());
    let mut communities = Vec::new();

    for &seed in largest {
        if processed.contains(seed) {
            continue;
        }

        let members = local_community(seed, largest, adjacency, &processed, config);
        processed.extend(members.iter().copied());

        if members.len() < config.min_community_size {
            continue;
        }

        let name = community_name(&members, graph);
        let mut community = ClusterInfo::describe(slugify(&name), &members, adjacency);
        community.name = Some(name);
        communities.push(community);
    }

    communities.sort_by(|a, b| b.size.cmp(&a.size));
    debug!(count = communities.len(), "Detected communities");
    communities
}

/// Grow a community around `seed` from the unprocessed members of the component.
fn local_community<'a>(
    seed: &'a str,
    component: &[&'a str],
    adjacency: &'a AdjacencyIndex<'_>,
    processed: &HashSet<&str>,
    config: &AnalysisConfig,
) -> Vec<&'a str> {
    let seed_neighbors: HashSet<&str> = adjacency.neighbors(seed).collect();
    let mut members = vec![seed];

    for &candidate in component {
        if candidate == seed || processed.contains(candidate) {
            continue;
        }

        let candidate_neighbors: HashSet<&str> = adjacency.neighbors(candidate).collect();
        let similarity = neighbor_similarity(&seed_neighbors, &candidate_neighbors);
        let linked = seed_neighbors.contains(candidate);

        if similarity > config.similarity_threshold
            || (linked && similarity > config.neighbor_similarity_threshold)
        {
            members.push(candidate);
        }
    }

    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::build_adjacency;
    use crate::model::{Link, Node};

    fn graph(ids: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::new(
            ids.iter().map(|id| Node::new(*id)).collect(),
            edges.iter().map(|(s, t)| Link::new(*s, *t)).collect(),
        )
    }

    #[test]
    fn similarity_uses_larger_neighbourhood() {
        let a: HashSet<&str> = ["x", "y", "z", "w"].into_iter().collect();
        let b: HashSet<&str> = ["x", "y"].into_iter().collect();

        assert!((neighbor_similarity(&a, &b) - 0.5).abs() < f64::EPSILON);
        assert!(neighbor_similarity(&HashSet::new(), &HashSet::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn small_largest_component_yields_nothing() {
        let g = graph(
            &["a", "b", "c", "d", "e", "f", "g"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("f", "g")],
        );
        let adjacency = build_adjacency(&g.nodes, &g.links);

        assert!(find_communities(&g, &adjacency, &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn bridge_endpoint_joins_first_seed() {
        // Triangles a-b-c and d-e-f, bridged by c-d.
        let g = graph(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ("a", "b"),
                ("b", "c"),
                ("c", "a"),
                ("d", "e"),
                ("e", "f"),
                ("f", "d"),
                ("c", "d"),
            ],
        );
        let adjacency = build_adjacency(&g.nodes, &g.links);

        let communities = find_communities(&g, &adjacency, &AnalysisConfig::default());

        // Component order from the traversal is a, c, d, f, e, b.
        // Seed a = {b, c}: c and d share one neighbour each (1/3), b shares c (1/2).
        // Seed f then only gathers e and is dropped as too small.
        assert_eq!(communities.len(), 1);
        assert_eq!(communities[0].nodes, vec!["a", "c", "d", "b"]);
        assert_eq!(communities[0].id, "general-community");
        assert_eq!(communities[0].name.as_deref(), Some("General Community"));
        assert!((communities[0].density - 0.667).abs() < f64::EPSILON);
        assert_eq!(communities[0].central_node.as_deref(), Some("c"));
    }

    #[test]
    fn undersized_groups_stay_processed() {
        // A star: the hub seeds first and absorbs nothing (leaves share no
        // neighbours with it), so it forms a discarded singleton. Leaves then
        // group together through their shared hub.
        let g = graph(
            &["hub", "l1", "l2", "l3", "l4", "l5"],
            &[
                ("hub", "l1"),
                ("hub", "l2"),
                ("hub", "l3"),
                ("hub", "l4"),
                ("hub", "l5"),
            ],
        );
        let adjacency = build_adjacency(&g.nodes, &g.links);

        let communities = find_communities(&g, &adjacency, &AnalysisConfig::default());

        assert_eq!(communities.len(), 1);
        assert!(!communities[0].contains("hub"));
        assert_eq!(communities[0].size, 5);
    }
}
