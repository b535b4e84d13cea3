//! Property mapping for generic graphs.
//!
//! Generic graphs name their id, source and target properties freely. A
//! [`PropertyMapping`] says which property plays which role; it is either
//! auto-detected from the first node and link or supplied by the caller.

use super::GenericGraph;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node properties tried, in order, as the node id.
pub const NODE_ID_CANDIDATES: [&str; 6] = ["id", "ID", "nodeId", "node_id", "name", "label"];

/// Link properties tried, in order, as the source id.
pub const SOURCE_CANDIDATES: [&str; 5] = ["source", "from", "src", "sourceId", "source_id"];

/// Link properties tried, in order, as the target id.
pub const TARGET_CANDIDATES: [&str; 5] = ["target", "to", "dest", "targetId", "target_id"];

/// Which top-level array holds the links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCollection {
    /// `links`
    Links,
    /// `edges`
    Edges,
}

impl LinkCollection {
    /// The top-level key of the collection.
    pub fn key(self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::Edges => "edges",
        }
    }
}

/// Roles of generic-graph properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMapping {
    /// Node property holding the node id
    pub node_id: String,
    /// Link property holding the source id
    pub link_source: String,
    /// Link property holding the target id
    pub link_target: String,
    /// Array the links are read from
    pub collection: LinkCollection,
}

/// Caller-chosen properties that take precedence over detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingOverrides {
    /// Node id property
    pub node_id: Option<String>,
    /// Link source property
    pub link_source: Option<String>,
    /// Link target property
    pub link_target: Option<String>,
}

impl MappingOverrides {
    /// Whether no property is overridden.
    pub fn is_empty(&self) -> bool {
        self.node_id.is_none() && self.link_source.is_none() && self.link_target.is_none()
    }
}

/// String form of a scalar property; numbers are stringified.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn first_scalar_candidate(object: Option<&Map<String, Value>>, candidates: &[&str]) -> Option<String> {
    let object = object?;
    candidates
        .iter()
        .find(|key| object.get(**key).and_then(scalar_string).is_some())
        .map(|key| (*key).to_string())
}

impl PropertyMapping {
    /// Auto-detect the mapping from the first node and first link.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapping`] if the first node has no scalar id
    /// candidate, or if the first link has no source or target candidate.
    pub fn detect(graph: &GenericGraph) -> Result<Self> {
        Self::detect_with(graph, &MappingOverrides::default())
    }

    /// Detect the mapping, keeping every property the caller overrides.
    ///
    /// A graph without links maps source and target to the first candidates,
    /// since no link needs them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapping`] if a role is neither overridden nor
    /// detectable.
    pub fn detect_with(graph: &GenericGraph, overrides: &MappingOverrides) -> Result<Self> {
        let first_node = graph.nodes.first().and_then(Value::as_object);
        let first_link = graph.links.first().and_then(Value::as_object);

        let node_id = overrides
            .node_id
            .clone()
            .or_else(|| first_scalar_candidate(first_node, &NODE_ID_CANDIDATES))
            .ok_or_else(|| {
                Error::Mapping(format!(
                    "no node id property found (tried {})",
                    NODE_ID_CANDIDATES.join(", ")
                ))
            })?;

        let link_role = |explicit: &Option<String>, candidates: &[&str], role: &str| {
            if let Some(property) = explicit {
                return Ok(property.clone());
            }
            if graph.links.is_empty() {
                return Ok(candidates[0].to_string());
            }
            first_scalar_candidate(first_link, candidates).ok_or_else(|| {
                Error::Mapping(format!(
                    "no link {role} property found (tried {})",
                    candidates.join(", ")
                ))
            })
        };

        let link_source = link_role(&overrides.link_source, &SOURCE_CANDIDATES[..], "source")?;
        let link_target = link_role(&overrides.link_target, &TARGET_CANDIDATES[..], "target")?;

        Ok(Self {
            node_id,
            link_source,
            link_target,
            collection: graph.collection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn generic(nodes: Value, links: Value) -> GenericGraph {
        GenericGraph {
            nodes: nodes.as_array().cloned().unwrap_or_default(),
            links: links.as_array().cloned().unwrap_or_default(),
            collection: LinkCollection::Links,
        }
    }

    #[rstest]
    #[case::plain(json!({"id": "a"}), "id")]
    #[case::upper(json!({"ID": 1, "name": "a"}), "ID")]
    #[case::name_before_label(json!({"label": "L", "name": "N"}), "name")]
    #[case::skips_non_scalar(json!({"id": {"x": 1}, "node_id": 7}), "node_id")]
    fn detects_node_id(#[case] node: Value, #[case] expected: &str) {
        let graph = generic(json!([node]), json!([{"source": "a", "target": "b"}]));

        assert_eq!(PropertyMapping::detect(&graph).unwrap().node_id, expected);
    }

    #[test]
    fn detects_link_roles_in_candidate_order() {
        let graph = generic(
            json!([{"id": "a"}]),
            json!([{"src": "a", "from": "a", "dest": "b", "targetId": "b"}]),
        );

        let mapping = PropertyMapping::detect(&graph).unwrap();

        assert_eq!(mapping.link_source, "from");
        assert_eq!(mapping.link_target, "dest");
    }

    #[test]
    fn overrides_win() {
        let graph = generic(json!([{"id": "a", "uid": "x"}]), json!([{"source": "a", "target": "b"}]));
        let overrides = MappingOverrides {
            node_id: Some("uid".into()),
            ..MappingOverrides::default()
        };

        let mapping = PropertyMapping::detect_with(&graph, &overrides).unwrap();

        assert_eq!(mapping.node_id, "uid");
        assert_eq!(mapping.link_source, "source");
    }

    #[test]
    fn missing_roles_are_errors() {
        let no_id = generic(json!([{"weight": [1]}]), json!([]));
        let no_target = generic(json!([{"id": "a"}]), json!([{"source": "a"}]));

        assert!(matches!(PropertyMapping::detect(&no_id), Err(Error::Mapping(_))));
        assert!(matches!(PropertyMapping::detect(&no_target), Err(Error::Mapping(_))));
    }

    #[test]
    fn linkless_graph_uses_default_roles() {
        let graph = generic(json!([{"id": "a"}]), json!([]));

        let mapping = PropertyMapping::detect(&graph).unwrap();

        assert_eq!(mapping.link_source, "source");
        assert_eq!(mapping.link_target, "target");
    }
}
