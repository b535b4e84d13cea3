//! Text search over nodes and links.

use crate::model::{Endpoint, Graph, ImportName, Link, Node, last_segment};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Default cap on returned search hits.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Node properties searched, in order.
const NODE_PROPERTIES: [&str; 4] = ["id", "path", "name", "label"];

/// Link properties searched, in order.
const LINK_PROPERTIES: [&str; 4] = ["type", "source", "target", "imports"];

/// Whether a hit is a node or a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Node hit
    Node,
    /// Link hit
    Link,
}

/// The matched entity itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchEntity<'g> {
    /// Matched node
    Node(&'g Node),
    /// Matched link
    Link(&'g Link),
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'g> {
    /// Entity kind
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Node id, or link id `"<source>-<target>"`
    pub id: String,
    /// Short label for result lists
    pub display_text: String,
    /// Name of the property that matched
    pub matched_property: &'static str,
    /// Value that matched
    pub matched_value: String,
    /// The entity
    pub entity: SearchEntity<'g>,
}

/// Last path segment, or the whole text when that segment is empty.
fn short_text(text: &str) -> &str {
    match last_segment(text) {
        "" => text,
        segment => segment,
    }
}

fn node_property<'n>(node: &'n Node, property: &str) -> Option<&'n str> {
    match property {
        // A path-derived id is not a property of its own.
        "id" => (!node.id_from_path).then_some(node.id.as_str()),
        "path" => Some(node.path.as_str()),
        "name" => node.name.as_deref(),
        "label" => node.label.as_deref(),
        _ => None,
    }
}

/// Raw endpoint strings only; embedded node objects are not text.
fn endpoint_text(endpoint: &Endpoint) -> Option<&str> {
    match endpoint {
        Endpoint::Id(id) => Some(id),
        Endpoint::Node(_) => None,
    }
}

fn link_match(link: &Link, property: &str, term: &str) -> Option<String> {
    let matches = |value: &str| value.to_lowercase().contains(term);

    let value = match property {
        "type" => Some(link.kind.as_str()),
        "source" => endpoint_text(&link.source),
        "target" => endpoint_text(&link.target),
        "imports" => {
            let hits: Vec<&str> = link
                .imports
                .iter()
                .map(ImportName::name)
                .filter(|&name| matches(name))
                .collect();
            return (!hits.is_empty()).then(|| hits.join(", "));
        }
        _ => None,
    };

    value.filter(|&value| matches(value)).map(str::to_string)
}

fn endpoint_short_name<'g>(graph: &'g Graph, id: &'g str) -> &'g str {
    graph
        .node(id)
        .map(|node| last_segment(&node.path))
        .filter(|segment| !segment.is_empty())
        .unwrap_or(id)
}

/// Case-insensitive substring search over node and link text properties.
///
/// Each matching property yields a hit; hits are then deduplicated by
/// `(kind, id)` keeping the first, and truncated to `max_results`. All node
/// hits precede link hits. A blank term matches nothing.
pub fn search_graph_entities<'g>(
    graph: &'g Graph,
    term: &str,
    max_results: usize,
) -> Vec<SearchResult<'g>> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for node in &graph.nodes {
        for property in NODE_PROPERTIES {
            let Some(value) = node_property(node, property) else {
                continue;
            };
            if value.is_empty() || !value.to_lowercase().contains(&term) {
                continue;
            }
            results.push(SearchResult {
                kind: EntityKind::Node,
                id: node.id.clone(),
                display_text: short_text(node.display_source()).to_string(),
                matched_property: property,
                matched_value: value.to_string(),
                entity: SearchEntity::Node(node),
            });
        }
    }

    for link in &graph.links {
        for property in LINK_PROPERTIES {
            let Some(matched_value) = link_match(link, property, &term) else {
                continue;
            };
            results.push(SearchResult {
                kind: EntityKind::Link,
                id: link.id(),
                display_text: format!(
                    "{} → {}",
                    endpoint_short_name(graph, link.source_id()),
                    endpoint_short_name(graph, link.target_id())
                ),
                matched_property: property,
                matched_value,
                entity: SearchEntity::Link(link),
            });
        }
    }

    let mut seen: HashSet<(EntityKind, String)> = HashSet::new();
    results.retain(|result| seen.insert((result.kind, result.id.clone())));
    results.truncate(max_results);

    debug!(term = %term, hits = results.len(), "Searched graph");
    results
}

/// Ids of nodes whose path, import sources, imported names or declaration
/// names contain `query` (case-insensitive). A blank query matches nothing.
pub fn filter_nodes_by_query(nodes: &[Node], query: &str) -> HashSet<String> {
    if query.trim().is_empty() {
        return HashSet::new();
    }
    let query = query.to_lowercase();
    let matches = |value: &str| value.to_lowercase().contains(&query);

    nodes
        .iter()
        .filter(|node| {
            matches(node.path.as_str())
                || node.import_sources().any(matches)
                || node.imported_names().any(matches)
                || node.declarations.iter().any(|decl| matches(decl.name.as_str()))
        })
        .map(|node| node.id.clone())
        .collect()
}
