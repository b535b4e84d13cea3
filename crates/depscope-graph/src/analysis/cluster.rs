//! Cluster descriptors shared by components and communities.

use super::adjacency::AdjacencyIndex;
use super::metrics::{pair_count, round_to};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A group of nodes: a connected component or a detected community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    /// Generated identifier (`component-<n>` or a community slug)
    pub id: String,

    /// Display name, set for communities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Member node ids in discovery order
    pub nodes: Vec<String>,

    /// Number of members
    pub size: usize,

    /// Internal edges over possible pairs, rounded to 3 decimals
    pub density: f64,

    /// Member with the most neighbours inside the cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub central_node: Option<String>,
}

impl ClusterInfo {
    /// Describe a member list against the adjacency index.
    ///
    /// Internal edges are counted once per unordered pair, only from the
    /// endpoint that orders first. The central node is the first member with
    /// the highest internal degree.
    pub(crate) fn describe(id: String, members: &[&str], adjacency: &AdjacencyIndex<'_>) -> Self {
        let member_set: HashSet<&str> = members.iter().copied().collect();

        let mut internal_edges = 0usize;
        let mut central_node: Option<&str> = None;
        let mut max_internal_degree: Option<usize> = None;

        for &member in members {
            let mut internal_degree = 0usize;
            for neighbor in adjacency.neighbors(member) {
                if !member_set.contains(neighbor) {
                    continue;
                }
                internal_degree += 1;
                if member < neighbor {
                    internal_edges += 1;
                }
            }

            if max_internal_degree.is_none_or(|max| internal_degree > max) {
                max_internal_degree = Some(internal_degree);
                central_node = Some(member);
            }
        }

        let possible = pair_count(members.len());
        #[allow(clippy::cast_precision_loss)]
        let density = if possible > 0 {
            internal_edges as f64 / possible as f64
        } else {
            0.0
        };

        Self {
            id,
            name: None,
            nodes: members.iter().map(|member| (*member).to_string()).collect(),
            size: members.len(),
            density: round_to(density, 3),
            central_node: central_node.map(str::to_string),
        }
    }

    /// Whether `node_id` is a member.
    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.iter().any(|member| member == node_id)
    }
}
