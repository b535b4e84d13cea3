//! Connected-component discovery.

use super::adjacency::AdjacencyIndex;
use super::cluster::ClusterInfo;
use crate::model::Node;
use std::collections::HashSet;

/// Collect the member lists of every connected component, in discovery order.
///
/// Nodes are visited in input order; each unvisited node seeds a stack-based
/// traversal that pushes unvisited neighbours in neighbour order.
pub(crate) fn component_members<'a>(
    nodes: &'a [Node],
    adjacency: &'a AdjacencyIndex<'_>,
) -> Vec<Vec<&'a str>> {
    let mut visited: HashSet<&str> = HashSet::with_capacity(nodes.len());
    let mut components = Vec::new();

    for node in nodes {
        let start = node.id.as_str();
        if visited.contains(start) {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            component.push(current);

            for neighbor in adjacency.neighbors(current) {
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        components.push(component);
    }

    components
}

/// Find every connected component of the graph.
///
/// Each node belongs to exactly one component; nodes without links form
/// components of size 1. Components are ordered by descending size, ties in
/// discovery order. Ids are `component-<discovery index>`.
pub fn find_connected_components(nodes: &[Node], adjacency: &AdjacencyIndex<'_>) -> Vec<ClusterInfo> {
    let mut components: Vec<ClusterInfo> = component_members(nodes, adjacency)
        .iter()
        .enumerate()
        .map(|(index, members)| {
            ClusterInfo::describe(format!("component-{index}"), members, adjacency)
        })
        .collect();

    components.sort_by(|a, b| b.size.cmp(&a.size));
    components
}
