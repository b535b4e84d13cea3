//! Loading graphs from JSON.
//!
//! Two dialects are accepted:
//!
//! - **Dependency graphs**: `nodes` carry `path`, `imports`, `exports` and
//!   `declarations`; `links` carry `source`, `target`, `imports` and `type`.
//!   Node ids are their paths.
//! - **Generic graphs**: any non-empty `nodes` array of objects plus a `links`
//!   or `edges` array. Which properties hold ids is decided by a
//!   [`PropertyMapping`].
//!
//! Loading happens in two steps: [`GraphDocument`] recognises the dialect,
//! then [`GraphDocument::into_graph`] converts it and collects
//! [`LoadWarning`]s for entries that could not be used as-is.

mod mapping;
mod warning;

pub use mapping::{
    LinkCollection, MappingOverrides, NODE_ID_CANDIDATES, PropertyMapping, SOURCE_CANDIDATES,
    TARGET_CANDIDATES,
};
pub use warning::LoadWarning;

use crate::error::{Error, Result};
use crate::model::{GENERIC_LINK_TYPE, Graph, ImportName, Link, Node};
use mapping::scalar_string;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Node properties modelled as fields rather than kept in `extra`.
const NODE_FIELDS: [&str; 4] = ["id", "path", "name", "label"];

/// Link properties modelled as fields rather than kept in `extra`.
const LINK_FIELDS: [&str; 4] = ["source", "target", "type", "imports"];

/// A graph in the dependency dialect, already typed.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyGraph {
    /// Nodes; a missing `id` is taken from `path`
    pub nodes: Vec<Node>,
    /// Links as given
    pub links: Vec<Link>,
}

/// A graph in the generic dialect, still untyped.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericGraph {
    /// Raw node entries
    pub nodes: Vec<Value>,
    /// Raw link entries from [`GenericGraph::collection`]
    pub links: Vec<Value>,
    /// Array the links came from
    pub collection: LinkCollection,
}

/// A parsed graph document of either dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphDocument {
    /// Dependency dialect
    Dependency(DependencyGraph),
    /// Generic dialect
    Generic(GenericGraph),
}

/// A converted graph and the problems found along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGraph {
    /// The graph
    pub graph: Graph,
    /// Non-fatal issues, in discovery order
    pub warnings: Vec<LoadWarning>,
}

fn is_array(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(Value::is_array)
}

fn is_string(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(Value::is_string)
}

fn is_dependency_node(node: &Value) -> bool {
    node.as_object().is_some_and(|node| {
        is_string(node, "path")
            && is_array(node, "imports")
            && is_array(node, "exports")
            && is_array(node, "declarations")
    })
}

fn is_dependency_link(link: &Value) -> bool {
    link.as_object().is_some_and(|link| {
        is_string(link, "source")
            && is_string(link, "target")
            && is_array(link, "imports")
            && is_string(link, "type")
    })
}

impl GraphDocument {
    /// Parse a JSON string and recognise its dialect.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON and [`Error::InvalidFormat`]
    /// when the document matches neither dialect.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Read a JSON file and recognise its dialect.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`GraphDocument::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading graph file");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Recognise the dialect of a parsed JSON value.
    ///
    /// The dependency dialect is tried first; every node and link must have
    /// its shape. Otherwise the generic dialect needs a non-empty `nodes`
    /// array whose first entry is an object, and a `links` or `edges` array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when neither dialect matches, or
    /// [`Error::Json`] when a dependency-dialect entry has a malformed field.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(Error::InvalidFormat(
                "expected a JSON object with nodes and links".to_string(),
            ));
        };

        let nodes = match root.remove("nodes") {
            Some(Value::Array(nodes)) => nodes,
            _ => {
                return Err(Error::InvalidFormat(
                    "expected a \"nodes\" array".to_string(),
                ));
            }
        };

        if let Some(Value::Array(links)) = root.get("links")
            && nodes.iter().all(is_dependency_node)
            && links.iter().all(is_dependency_link)
        {
            let links = links.clone();
            return Ok(Self::Dependency(DependencyGraph::from_values(nodes, links)?));
        }

        let (collection, links) = match (root.remove("links"), root.remove("edges")) {
            (Some(Value::Array(links)), _) => (LinkCollection::Links, links),
            (_, Some(Value::Array(edges))) => (LinkCollection::Edges, edges),
            _ => {
                return Err(Error::InvalidFormat(
                    "expected a \"links\" or \"edges\" array".to_string(),
                ));
            }
        };

        if !nodes.first().is_some_and(Value::is_object) {
            return Err(Error::InvalidFormat(
                "expected either a dependency graph or a generic graph with at least one node object"
                    .to_string(),
            ));
        }

        Ok(Self::Generic(GenericGraph {
            nodes,
            links,
            collection,
        }))
    }

    /// Name of the recognised dialect.
    pub fn dialect(&self) -> &'static str {
        match self {
            Self::Dependency(_) => "dependency",
            Self::Generic(_) => "generic",
        }
    }

    /// Convert the document into a graph.
    ///
    /// Generic documents are mapped with [`PropertyMapping::detect_with`];
    /// the overrides are ignored for dependency documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapping`] if a generic document cannot be mapped.
    pub fn into_graph(self, overrides: &MappingOverrides) -> Result<LoadedGraph> {
        let loaded = match self {
            Self::Dependency(graph) => graph.into_graph(),
            Self::Generic(graph) => {
                let mapping = PropertyMapping::detect_with(&graph, overrides)?;
                debug!(?mapping, "Mapping generic graph");
                graph.into_graph(&mapping)
            }
        };

        for warning in &loaded.warnings {
            warn!(kind = warning.kind(), "{warning}");
        }
        debug!(
            nodes = loaded.graph.nodes.len(),
            links = loaded.graph.links.len(),
            warnings = loaded.warnings.len(),
            "Loaded graph"
        );
        Ok(loaded)
    }
}

impl DependencyGraph {
    fn from_values(nodes: Vec<Value>, links: Vec<Value>) -> Result<Self> {
        let nodes = nodes
            .into_iter()
            .map(|mut node| {
                let mut id_from_path = false;
                if let Some(object) = node.as_object_mut() {
                    let id = object
                        .get("id")
                        .and_then(scalar_string)
                        .filter(|id| !id.is_empty());
                    let id = match id {
                        Some(id) => Value::String(id),
                        None => {
                            id_from_path = true;
                            object.get("path").cloned().unwrap_or_default()
                        }
                    };
                    object.insert("id".to_string(), id);
                }
                serde_json::from_value(node).map(|node: Node| Node {
                    id_from_path,
                    ..node
                })
            })
            .collect::<std::result::Result<Vec<Node>, _>>()?;
        let links = links
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Link>, _>>()?;

        Ok(Self { nodes, links })
    }

    /// Wrap the typed lists into a graph, reporting duplicates and dangling links.
    pub fn into_graph(self) -> LoadedGraph {
        finish(Graph::new(self.nodes, self.links), Vec::new())
    }
}

impl GenericGraph {
    /// Convert raw entries into typed nodes and links using `mapping`.
    ///
    /// Entries lacking a mapped property are skipped with a warning. Nodes
    /// keep their own string `path`, else use the id; links keep their own
    /// string `type`, else [`GENERIC_LINK_TYPE`], and their own string
    /// `imports`. Other properties land in `extra`.
    pub fn into_graph(self, mapping: &PropertyMapping) -> LoadedGraph {
        let mut warnings = Vec::new();

        let nodes = self
            .nodes
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let node = generic_node(raw, &mapping.node_id);
                if node.is_none() {
                    warnings.push(LoadWarning::MissingProperty {
                        entity: "node",
                        index,
                        property: mapping.node_id.clone(),
                    });
                }
                node
            })
            .collect();

        let links = self
            .links
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let link = generic_link(raw, mapping);
                if let Err(property) = &link {
                    warnings.push(LoadWarning::MissingProperty {
                        entity: "link",
                        index,
                        property: (*property).to_string(),
                    });
                }
                link.ok()
            })
            .collect();

        finish(Graph::new(nodes, links), warnings)
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn generic_node(raw: Value, id_property: &str) -> Option<Node> {
    let Value::Object(object) = raw else {
        return None;
    };
    let id = object.get(id_property).and_then(scalar_string)?;

    let mut node = Node::new(id);
    if let Some(path) = string_field(&object, "path") {
        node.path = path;
    }
    node.name = string_field(&object, "name");
    node.label = string_field(&object, "label");
    node.extra = object
        .into_iter()
        .filter(|(key, _)| !NODE_FIELDS.contains(&key.as_str()))
        .collect();
    Some(node)
}

/// Convert a raw link, or return the name of the missing mapped property.
fn generic_link<'m>(raw: Value, mapping: &'m PropertyMapping) -> std::result::Result<Link, &'m str> {
    let Value::Object(object) = raw else {
        return Err(mapping.link_source.as_str());
    };
    let source = object
        .get(&mapping.link_source)
        .and_then(scalar_string)
        .ok_or(mapping.link_source.as_str())?;
    let target = object
        .get(&mapping.link_target)
        .and_then(scalar_string)
        .ok_or(mapping.link_target.as_str())?;

    let kind = string_field(&object, "type").unwrap_or_else(|| GENERIC_LINK_TYPE.to_string());
    let imports = object
        .get("imports")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(|name| ImportName::Name(name.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let mut link = Link::new(source, target).with_kind(kind);
    link.imports = imports;
    link.extra = object
        .into_iter()
        .filter(|(key, _)| !LINK_FIELDS.contains(&key.as_str()))
        .collect();
    Ok(link)
}

/// Report duplicate node ids and dangling links of a converted graph.
fn finish(graph: Graph, mut warnings: Vec<LoadWarning>) -> LoadedGraph {
    let mut ids: HashSet<&str> = HashSet::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        if !ids.insert(node.id.as_str()) {
            warnings.push(LoadWarning::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
    }

    for link in &graph.links {
        let (source, target) = (link.source_id(), link.target_id());
        if !ids.contains(source) || !ids.contains(target) {
            warnings.push(LoadWarning::DanglingLink {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
    }

    LoadedGraph { graph, warnings }
}
