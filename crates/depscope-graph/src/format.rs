//! Display formatting for nodes and links.

use crate::model::{Link, Node};
use serde::Serialize;

/// A node split into display parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedNode {
    /// Last path segment of the id
    pub path_file: String,
    /// Remaining path segments, empty for single-segment ids
    pub path_parent: String,
    /// Exported declaration names grouped by kind, kinds in first-seen order
    pub declarations: Vec<(String, String)>,
}

/// A link as a `from → to` pair of display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedLink {
    /// Left-hand side
    pub from: String,
    /// Right-hand side
    pub to: String,
}

fn split_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((parent, file)) => (file, parent),
        None => (path, ""),
    }
}

/// `"file (parent/path)"`, or the bare id when it has a single segment.
pub fn format_path_segment(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, file)) => format!("{file} ({parent})"),
        None => path.to_string(),
    }
}

/// Split a node into display parts.
pub fn format_node(node: &Node) -> FormattedNode {
    let (path_file, path_parent) = split_path(&node.id);
    let mut declarations: Vec<(String, String)> = Vec::new();

    for decl in node.exported_declarations() {
        match declarations.iter_mut().find(|(kind, _)| *kind == decl.kind) {
            Some((_, names)) => {
                names.push_str(", ");
                names.push_str(&decl.name);
            }
            None => declarations.push((decl.kind.clone(), decl.name.clone())),
        }
    }

    FormattedNode {
        path_file: path_file.to_string(),
        path_parent: path_parent.to_string(),
        declarations,
    }
}

/// Format a link for display.
///
/// Module dependency links (`import`, `export`, `re-export`) point from the
/// importer to the exporter, so they are shown reversed: exporter first.
pub fn format_link(link: &Link) -> FormattedLink {
    let (source, target) = (link.source_id(), link.target_id());
    let (from, to) = if link.is_dependency_link() {
        (target, source)
    } else {
        (source, target)
    };

    FormattedLink {
        from: format_path_segment(from),
        to: format_path_segment(to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Declaration;
    use rstest::rstest;

    #[rstest]
    #[case::nested("src/utils/format.ts", "format.ts (src/utils)")]
    #[case::single("main.ts", "main.ts")]
    #[case::leading_slash("/root.ts", "root.ts ()")]
    fn path_segments(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(format_path_segment(path), expected);
    }

    #[test]
    fn node_declarations_grouped_by_kind() {
        let node = Node::new("src/api/client.ts")
            .with_declaration(Declaration::exported("fetchUser", "function"))
            .with_declaration(Declaration::exported("Client", "class"))
            .with_declaration(Declaration::local("helper", "function"))
            .with_declaration(Declaration::exported("fetchPosts", "function"));

        let formatted = format_node(&node);

        assert_eq!(formatted.path_file, "client.ts");
        assert_eq!(formatted.path_parent, "src/api");
        assert_eq!(
            formatted.declarations,
            vec![
                ("function".to_string(), "fetchUser, fetchPosts".to_string()),
                ("class".to_string(), "Client".to_string()),
            ]
        );
    }

    #[test]
    fn single_segment_node_has_empty_parent() {
        let formatted = format_node(&Node::new("index"));

        assert_eq!(formatted.path_file, "index");
        assert_eq!(formatted.path_parent, "");
    }

    #[rstest]
    #[case::import_reversed("import", "b.ts (lib)", "a.ts (src)")]
    #[case::re_export_reversed("re-export", "b.ts (lib)", "a.ts (src)")]
    #[case::generic_as_is("calls", "a.ts (src)", "b.ts (lib)")]
    fn link_direction(#[case] kind: &str, #[case] from: &str, #[case] to: &str) {
        let link = Link::new("src/a.ts", "lib/b.ts").with_kind(kind);

        assert_eq!(
            format_link(&link),
            FormattedLink {
                from: from.to_string(),
                to: to.to_string(),
            }
        );
    }
}
