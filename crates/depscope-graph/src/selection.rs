//! Selection and neighbourhood resolution.
//!
//! These operate on the raw link list rather than the adjacency index, so a
//! link to an id that is not a node still reports that id.

use crate::model::Graph;
use std::collections::{BTreeSet, HashSet, VecDeque};
use tracing::trace;

/// A set of node ids.
pub type IdSet = BTreeSet<String>;

/// What the user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<'a> {
    /// A node, by id
    Node(&'a str),
    /// A link, by its `"<source>-<target>"` id
    Link(&'a str),
    /// Nothing selected
    #[default]
    None,
}

/// Ids of the entities connected to the selection.
///
/// For a node: the opposite endpoint of every link touching it (a self-loop
/// yields the node itself). For a link: both endpoints of the first link
/// whose id matches; empty if none does.
pub fn find_connected_entities(graph: &Graph, selection: Selection<'_>) -> IdSet {
    let mut connected = IdSet::new();

    match selection {
        Selection::Node(node_id) => {
            for link in &graph.links {
                let (source, target) = (link.source_id(), link.target_id());
                if source == node_id {
                    connected.insert(target.to_string());
                } else if target == node_id {
                    connected.insert(source.to_string());
                }
            }
        }
        Selection::Link(link_id) => {
            if let Some(link) = graph.links.iter().find(|link| link.id() == link_id) {
                connected.insert(link.source_id().to_string());
                connected.insert(link.target_id().to_string());
            } else {
                trace!(link_id, "Selected link not found");
            }
        }
        Selection::None => {}
    }

    connected
}

/// The seed node plus every node within `depth` hops of it.
///
/// A `depth` of zero or less yields just the seed.
pub fn find_neighbors_at_depth(graph: &Graph, node_id: &str, depth: i64) -> IdSet {
    let mut neighbors = IdSet::from([node_id.to_string()]);
    if depth <= 0 {
        return neighbors;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, i64)> = VecDeque::from([(node_id, 0)]);

    while let Some((current, hops)) = queue.pop_front() {
        if hops >= depth || !visited.insert(current) {
            continue;
        }

        for link in &graph.links {
            let (source, target) = (link.source_id(), link.target_id());
            let neighbor = if source == current {
                target
            } else if target == current {
                source
            } else {
                continue;
            };

            neighbors.insert(neighbor.to_string());
            if hops < depth - 1 {
                queue.push_back((neighbor, hops + 1));
            }
        }
    }

    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Link, Node};
    use rstest::rstest;

    fn chain() -> Graph {
        Graph::new(
            ["A", "B", "C", "D"].into_iter().map(Node::new).collect(),
            vec![Link::new("A", "B"), Link::new("B", "C")],
        )
    }

    fn ids(items: &[&str]) -> IdSet {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[rstest]
    #[case::middle_node(Selection::Node("B"), &["A", "C"])]
    #[case::isolated_node(Selection::Node("D"), &[])]
    #[case::link(Selection::Link("A-B"), &["A", "B"])]
    #[case::unknown_link(Selection::Link("A-C"), &[])]
    #[case::nothing(Selection::None, &[])]
    fn connected_entities(#[case] selection: Selection<'static>, #[case] expected: &[&str]) {
        assert_eq!(find_connected_entities(&chain(), selection), ids(expected));
    }

    #[test]
    fn self_loop_contributes_node_itself() {
        let graph = Graph::new(vec![Node::new("x")], vec![Link::new("x", "x")]);

        assert_eq!(find_connected_entities(&graph, Selection::Node("x")), ids(&["x"]));
    }

    #[test]
    fn hyphenated_ids_match_first_link() {
        let graph = Graph::new(
            ["a-b", "c", "a", "b-c"].into_iter().map(Node::new).collect(),
            vec![Link::new("a-b", "c"), Link::new("a", "b-c")],
        );

        assert_eq!(
            find_connected_entities(&graph, Selection::Link("a-b-c")),
            ids(&["a-b", "c"])
        );
    }

    #[rstest]
    #[case::zero(0, &["A"])]
    #[case::negative(-3, &["A"])]
    #[case::one_hop(1, &["A", "B"])]
    #[case::two_hops(2, &["A", "B", "C"])]
    #[case::beyond_reach(10, &["A", "B", "C"])]
    fn neighbors_by_depth(#[case] depth: i64, #[case] expected: &[&str]) {
        assert_eq!(find_neighbors_at_depth(&chain(), "A", depth), ids(expected));
    }

    #[test]
    fn unknown_seed_yields_itself() {
        assert_eq!(find_neighbors_at_depth(&chain(), "Z", 2), ids(&["Z"]));
    }
}
