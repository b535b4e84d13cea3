//! Non-fatal problems found while loading a graph.
//!
//! A graph file with a handful of bad entries is still worth analysing, so
//! the loader skips or keeps such entries and reports a [`LoadWarning`] for
//! each instead of failing the whole load.

use std::fmt;

/// A non-fatal issue found while converting a document into a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A link references an id that is not a node.
    ///
    /// The link is kept in the graph and ignored by the adjacency index.
    DanglingLink {
        /// Resolved source id
        source: String,
        /// Resolved target id
        target: String,
    },

    /// More than one node carries the same id.
    ///
    /// All copies are kept; the analysis treats them as one node.
    DuplicateNodeId {
        /// The repeated id
        id: String,
    },

    /// A generic-dialect node or link lacks the mapped property and was skipped.
    MissingProperty {
        /// Whether the entry was a node or a link
        entity: &'static str,
        /// 0-based position of the entry in its array
        index: usize,
        /// The mapped property name
        property: String,
    },
}

impl LoadWarning {
    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DanglingLink { .. } => "dangling_link",
            Self::DuplicateNodeId { .. } => "duplicate_node_id",
            Self::MissingProperty { .. } => "missing_property",
        }
    }

    /// Returns a human-readable description of the warning.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::DanglingLink { source, target } => {
                format!("link {source} -> {target} references an unknown node")
            }
            Self::DuplicateNodeId { id } => format!("duplicate node id: {id}"),
            Self::MissingProperty {
                entity,
                index,
                property,
            } => format!("{entity} {index}: missing property '{property}', skipped"),
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl std::error::Error for LoadWarning {}
