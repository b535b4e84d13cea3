//! Graph model types.
//!
//! These are plain data structures: the loader produces them, the analysis,
//! selection and search modules read them. Fields the analysis never looks at
//! (`imports`/`exports` metadata on nodes, producer-specific keys) are kept as
//! opaque JSON so that superset schemas survive a load/serialize cycle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Link type assigned to generic-dialect links that carry no `type` of their own.
pub const GENERIC_LINK_TYPE: &str = "dependency";

/// Link types that describe module import/export relationships.
///
/// Links of these types point from the importing file to the file that
/// provides the symbols.
pub const DEPENDENCY_LINK_TYPES: [&str; 3] = ["import", "export", "re-export"];

/// A declaration found in a source file (function, class, type, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    /// Declared name
    pub name: String,

    /// Declaration kind (`function`, `class`, `interface`, `type`, `variable`, `enum`, ...)
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Whether the declaration is exported from its file
    #[serde(default)]
    pub is_exported: bool,

    /// Whether the declaration is the default export
    #[serde(default)]
    pub is_default: bool,

    /// Producer-specific fields (source file, position, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Declaration {
    /// Create an exported declaration.
    pub fn exported(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            is_exported: true,
            is_default: false,
            extra: Map::new(),
        }
    }

    /// Create a file-local (non-exported) declaration.
    pub fn local(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            is_exported: false,
            ..Self::exported(name, kind)
        }
    }
}

/// A vertex of the graph, typically a source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the graph
    pub id: String,

    /// Slash-separated path, used for display when present
    #[serde(default)]
    pub path: String,

    /// Optional human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Import statements of the file (opaque to the analysis)
    #[serde(default)]
    pub imports: Vec<Value>,

    /// Export statements of the file (opaque to the analysis)
    #[serde(default)]
    pub exports: Vec<Value>,

    /// Declarations found in the file, in source order
    #[serde(default)]
    pub declarations: Vec<Declaration>,

    /// Any other properties carried by the input
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Set when the input had no id and `id` was copied from `path`
    #[serde(skip)]
    pub id_from_path: bool,
}

impl Node {
    /// Create a node whose path equals its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            path: id.clone(),
            id,
            name: None,
            label: None,
            id_from_path: false,
            imports: Vec::new(),
            exports: Vec::new(),
            declarations: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Create a node identified only by its path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            id_from_path: true,
            ..Self::new(path)
        }
    }

    /// Builder-style helper to attach a declaration.
    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Builder-style helper to set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder-style helper to set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Best identifying string for display: path, then id, then name.
    pub fn display_source(&self) -> &str {
        if !self.path.is_empty() {
            &self.path
        } else if !self.id.is_empty() {
            &self.id
        } else {
            self.name.as_deref().unwrap_or_default()
        }
    }

    /// Final path segment of [`Node::display_source`].
    pub fn short_name(&self) -> &str {
        last_segment(self.display_source())
    }

    /// Module specifiers this file imports from (`imports[].from`).
    pub fn import_sources(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .filter_map(|import| import.get("from").and_then(Value::as_str))
    }

    /// Names of all imported symbols (`imports[].imports[].name`).
    pub fn imported_names(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .filter_map(|import| import.get("imports").and_then(Value::as_array))
            .flatten()
            .filter_map(|specifier| specifier.get("name").and_then(Value::as_str))
    }

    /// Declarations exported from this file.
    pub fn exported_declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(|decl| decl.is_exported)
    }
}

/// A node reference embedded in a link instead of a raw id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedNode {
    /// Referenced node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Referenced node path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Remaining properties of the embedded node
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One end of a link: either a raw node id or an embedded node reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Raw node id
    Id(String),
    /// Embedded node object
    Node(EmbeddedNode),
}

impl Endpoint {
    /// Resolve the endpoint to a node id.
    ///
    /// Embedded references resolve to their `id`, falling back to `path`.
    /// A reference carrying neither resolves to the empty string, which never
    /// matches a node.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Node(node) => node
                .id
                .as_deref()
                .filter(|id| !id.is_empty())
                .or(node.path.as_deref())
                .unwrap_or_default(),
        }
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A structured import specifier (`import { name as alias }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSpecifier {
    /// Imported symbol name
    pub name: String,

    /// Local alias, if renamed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Default import
    #[serde(default)]
    pub is_default: bool,

    /// Namespace import (`* as ns`)
    #[serde(default)]
    pub is_namespace: bool,
}

/// An entry of a link's `imports` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImportName {
    /// Plain symbol name
    Name(String),
    /// Structured specifier
    Specifier(ImportSpecifier),
}

impl ImportName {
    /// The imported symbol name.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Specifier(spec) => &spec.name,
        }
    }
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Importing side
    pub source: Endpoint,

    /// Imported side
    pub target: Endpoint,

    /// Relationship tag (`import`, `export`, `re-export`, or producer-defined)
    #[serde(rename = "type", default = "default_link_type")]
    pub kind: String,

    /// Symbols carried by the link
    #[serde(default)]
    pub imports: Vec<ImportName>,

    /// Any other properties carried by the input
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_link_type() -> String {
    GENERIC_LINK_TYPE.to_string()
}

impl Link {
    /// Create an `import` link between two node ids.
    pub fn new(source: impl Into<Endpoint>, target: impl Into<Endpoint>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind: "import".to_string(),
            imports: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Builder-style helper to set the link type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builder-style helper to attach imported symbol names.
    #[must_use]
    pub fn with_imports<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports
            .extend(names.into_iter().map(|name| ImportName::Name(name.into())));
        self
    }

    /// Resolved source node id.
    pub fn source_id(&self) -> &str {
        self.source.id()
    }

    /// Resolved target node id.
    pub fn target_id(&self) -> &str {
        self.target.id()
    }

    /// Identifier of the link as `"<source>-<target>"`.
    ///
    /// Ids that themselves contain hyphens make this ambiguous; the first
    /// matching link wins wherever it is used for lookup.
    pub fn id(&self) -> String {
        format!("{}-{}", self.source_id(), self.target_id())
    }

    /// Whether the link type is one of the module dependency types.
    pub fn is_dependency_link(&self) -> bool {
        DEPENDENCY_LINK_TYPES.contains(&self.kind.as_str())
    }

    /// Whether `node_id` is one of the link's endpoints.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source_id() == node_id || self.target_id() == node_id
    }
}

/// A complete graph snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Vertices in input order
    pub nodes: Vec<Node>,

    /// Edges in input order
    #[serde(alias = "edges", default)]
    pub links: Vec<Link>,
}

impl Graph {
    /// Create a graph from nodes and links.
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    /// Find a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Links touching the given node.
    pub fn links_of<'g>(&'g self, node_id: &'g str) -> impl Iterator<Item = &'g Link> + 'g {
        self.links.iter().filter(move |link| link.touches(node_id))
    }
}

/// Final `/`-separated segment of a path.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
