//! Undirected adjacency index built from node and link lists.
//!
//! Direction and multiplicity of links are discarded: two nodes are either
//! neighbours or not. The index is backed by petgraph's `UnGraphMap`, which
//! keeps nodes in insertion order and each neighbour list in first-insertion
//! order, so every traversal over it is deterministic for a given input.

use crate::model::{Link, Node};
use petgraph::graphmap::UnGraphMap;
use tracing::trace;

/// Mapping from node id to the set of neighbouring node ids.
///
/// Every node of the input has an entry, including nodes without links.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<'g> {
    graph: UnGraphMap<&'g str, ()>,
}

impl<'g> AdjacencyIndex<'g> {
    /// Node ids in input order.
    pub fn node_ids(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.graph.nodes()
    }

    /// Number of nodes in the index.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether the index has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether `id` is a node of the index.
    pub fn contains<'a>(&'a self, id: &'a str) -> bool
    where
        'g: 'a,
    {
        let graph: &'a UnGraphMap<&'a str, ()> = &self.graph;
        graph.contains_node(id)
    }

    /// Neighbours of `id` in first-insertion order.
    ///
    /// Unknown ids have no neighbours.
    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a
    where
        'g: 'a,
    {
        let graph: &'a UnGraphMap<&'a str, ()> = &self.graph;
        graph.neighbors(id)
    }

    /// Whether `a` and `b` are neighbours.
    pub fn are_adjacent<'a>(&'a self, a: &'a str, b: &'a str) -> bool
    where
        'g: 'a,
    {
        let graph: &'a UnGraphMap<&'a str, ()> = &self.graph;
        graph.contains_edge(a, b)
    }

    /// Number of distinct neighbours of `id` (0 for unknown ids).
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).count()
    }

    /// Number of distinct undirected neighbour pairs.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Build the adjacency index for a node and link list.
///
/// Every node id is seeded with an empty neighbour set. A link contributes a
/// neighbour pair only when both of its resolved endpoint ids are nodes;
/// dangling links are skipped without error. A self-loop records the node as
/// its own neighbour once.
pub fn build_adjacency<'g>(nodes: &'g [Node], links: &'g [Link]) -> AdjacencyIndex<'g> {
    let mut graph = UnGraphMap::with_capacity(nodes.len(), links.len());

    for node in nodes {
        graph.add_node(node.id.as_str());
    }

    let mut dropped = 0usize;
    for link in links {
        let (source, target) = (link.source_id(), link.target_id());
        if graph.contains_node(source) && graph.contains_node(target) {
            graph.add_edge(source, target, ());
        } else {
            dropped += 1;
            trace!(source, target, "Link references unknown node, excluded from adjacency");
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "Dangling links excluded from adjacency index");
    }

    AdjacencyIndex { graph }
}
