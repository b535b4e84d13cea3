//! Tunable thresholds for structural analysis.

use serde::{Deserialize, Serialize};

/// Smallest largest-component size for which communities are detected.
pub const MIN_COMPONENT_FOR_COMMUNITIES: usize = 6;

/// Communities with fewer members are discarded.
pub const MIN_COMMUNITY_SIZE: usize = 3;

/// Neighbour-overlap similarity above which any node joins a seed's community.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Lower similarity bar for nodes directly linked to the seed.
pub const NEIGHBOR_SIMILARITY_THRESHOLD: f64 = 0.1;

/// Upper bound on reported hub nodes.
pub const MAX_HUBS: usize = 10;

/// Fraction of connected nodes reported as hubs.
pub const HUB_FRACTION: f64 = 0.1;

/// Thresholds used by [`analyze_graph_structure_with`](crate::analysis::analyze_graph_structure_with).
///
/// The defaults reproduce the documented behavior; overriding them is meant
/// for experimentation on unusually shaped graphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// See [`MIN_COMPONENT_FOR_COMMUNITIES`]
    pub min_component_for_communities: usize,
    /// See [`MIN_COMMUNITY_SIZE`]
    pub min_community_size: usize,
    /// See [`SIMILARITY_THRESHOLD`]
    pub similarity_threshold: f64,
    /// See [`NEIGHBOR_SIMILARITY_THRESHOLD`]
    pub neighbor_similarity_threshold: f64,
    /// See [`MAX_HUBS`]
    pub max_hubs: usize,
    /// See [`HUB_FRACTION`]
    pub hub_fraction: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_component_for_communities: MIN_COMPONENT_FOR_COMMUNITIES,
            min_community_size: MIN_COMMUNITY_SIZE,
            similarity_threshold: SIMILARITY_THRESHOLD,
            neighbor_similarity_threshold: NEIGHBOR_SIMILARITY_THRESHOLD,
            max_hubs: MAX_HUBS,
            hub_fraction: HUB_FRACTION,
        }
    }
}
