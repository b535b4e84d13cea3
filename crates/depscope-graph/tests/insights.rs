//! End-to-end analysis scenarios over loaded and hand-built graphs.

use depscope_graph::analysis::{ClusterInfo, build_adjacency, find_communities, insights_summary};
use depscope_graph::{
    AnalysisConfig, Graph, GraphDocument, Link, MappingOverrides, Node, Selection,
    analyze_graph_structure, analyze_graph_structure_with, find_connected_entities,
    search_graph_entities,
};
use std::collections::BTreeSet;
use std::path::PathBuf;

// =============================================================================
// Test Helpers
// =============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn sample_graph() -> Graph {
    GraphDocument::from_path(fixture("sample_graph.json"))
        .expect("fixture parses")
        .into_graph(&MappingOverrides::default())
        .expect("fixture converts")
        .graph
}

fn graph(ids: &[&str], edges: &[(&str, &str)]) -> Graph {
    Graph::new(
        ids.iter().map(|id| Node::new(*id)).collect(),
        edges.iter().map(|(s, t)| Link::new(*s, *t)).collect(),
    )
}

fn member_ids(cluster: &ClusterInfo) -> Vec<&str> {
    cluster.nodes.iter().map(String::as_str).collect()
}

// =============================================================================
// Small graphs
// =============================================================================

#[test]
fn chain_with_detached_node() {
    let g = graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C")]);

    let insights = analyze_graph_structure(&g);

    assert_eq!(insights.connected_components.len(), 2);
    assert_eq!(member_ids(&insights.connected_components[0]), vec!["A", "B", "C"]);
    assert_eq!(member_ids(&insights.connected_components[1]), vec!["D"]);
    assert_eq!(insights.isolated_nodes, vec!["D"]);

    let connected = find_connected_entities(&g, Selection::Node("B"));
    assert_eq!(
        connected,
        BTreeSet::from(["A".to_string(), "C".to_string()])
    );
}

#[test]
fn largest_component_of_five_has_no_communities() {
    let g = graph(
        &["a", "b", "c", "d", "e", "x", "y", "z"],
        &[
            ("a", "b"),
            ("a", "c"),
            ("a", "d"),
            ("a", "e"),
            ("b", "c"),
            ("x", "y"),
            ("y", "z"),
        ],
    );

    let insights = analyze_graph_structure(&g);

    assert_eq!(insights.largest_component.as_ref().map(|c| c.size), Some(5));
    assert!(insights.communities.is_empty());
}

#[test]
fn lowered_threshold_enables_communities() {
    let g = graph(
        &["a", "b", "c", "d", "e"],
        &[("a", "b"), ("b", "c"), ("c", "a"), ("d", "e"), ("e", "c")],
    );
    let config = AnalysisConfig {
        min_component_for_communities: 5,
        ..AnalysisConfig::default()
    };

    assert!(analyze_graph_structure(&g).communities.is_empty());
    assert!(!analyze_graph_structure_with(&g, &config).communities.is_empty());
}

#[test]
fn dangling_links_count_but_do_not_connect() {
    let g = graph(&["a", "b"], &[("a", "ghost"), ("a", "b")]);

    let insights = analyze_graph_structure(&g);

    assert_eq!(insights.total_links, 2);
    assert_eq!(insights.connected_components.len(), 1);
    assert_eq!(insights.hub_nodes[0].connections, vec!["b"]);
}

#[test]
fn duplicate_links_inflate_density_only() {
    let g = graph(&["a", "b"], &[("a", "b"), ("b", "a"), ("a", "b")]);

    let insights = analyze_graph_structure(&g);

    assert!((insights.density - 3.0).abs() < f64::EPSILON);
    assert_eq!(insights.hub_nodes[0].degree, 1);
    assert!((insights.connected_components[0].density - 1.0).abs() < f64::EPSILON);
}

#[test]
fn search_auth_matches_path() {
    let mut node = Node::new("n1");
    node.path = "services/auth-service.ts".to_string();
    let g = Graph::new(vec![node], vec![]);

    let results = search_graph_entities(&g, "Auth", 20);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_text, "auth-service.ts");
    assert_eq!(results[0].matched_property, "path");
}

// =============================================================================
// Sample fixture
// =============================================================================

mod sample_fixture {
    use super::*;

    #[test]
    fn metrics_match_closed_forms() {
        let insights = analyze_graph_structure(&sample_graph());

        assert_eq!(insights.total_nodes, 13);
        assert_eq!(insights.total_links, 7);
        assert!((insights.average_degree - 1.08).abs() < 1e-9);
        assert!((insights.density - 0.09).abs() < 1e-9);
    }

    #[test]
    fn components_hubs_and_isolated() {
        let insights = analyze_graph_structure(&sample_graph());

        let sizes: Vec<usize> = insights.connected_components.iter().map(|c| c.size).collect();
        assert_eq!(sizes, vec![7, 2, 1, 1, 1, 1]);
        assert_eq!(
            insights.isolated_nodes,
            vec![
                "src/types/user.ts",
                "src/legacy/old-widget.ts",
                "src/config/env.ts",
                "src/styles/theme.ts",
            ]
        );
        assert_eq!(insights.hub_nodes.len(), 1);
        let most = insights.most_connected_node.expect("has a hub");
        assert_eq!(most.id, "src/app.tsx");
        assert_eq!(most.degree, 3);
    }

    #[test]
    fn community_named_after_exports() {
        let insights = analyze_graph_structure(&sample_graph());

        assert_eq!(insights.communities.len(), 1);
        let community = &insights.communities[0];
        assert_eq!(community.id, "login-community");
        assert_eq!(community.name.as_deref(), Some("Login Community"));
        assert_eq!(
            member_ids(community),
            vec![
                "src/index.ts",
                "src/components/LoginForm.tsx",
                "src/components/Header.tsx",
            ]
        );
    }

    #[test]
    fn community_detection_matches_direct_call() {
        let g = sample_graph();
        let adjacency = build_adjacency(&g.nodes, &g.links);

        let direct = find_communities(&g, &adjacency, &AnalysisConfig::default());

        assert_eq!(direct, analyze_graph_structure(&g).communities);
    }

    #[test]
    fn summary_lines() {
        let lines = insights_summary(&analyze_graph_structure(&sample_graph()));

        assert_eq!(
            lines,
            vec![
                "📊 13 nodes, 7 connections",
                "🔗 6 separate components",
                "📈 Largest component: 7 nodes (54%)",
                "🏝️ 4 isolated nodes",
                "👥 1 communities detected",
                "📏 Average community size: 3 nodes",
                "⭐ Most connected: app.tsx (3 connections)",
                "🕸️ Sparse graph (9% density)",
            ]
        );
    }

    #[test]
    fn path_only_nodes_match_on_path() {
        let g = sample_graph();

        let results = search_graph_entities(&g, "Auth", 20);

        let node = &results[0];
        assert_eq!(node.id, "src/services/auth-service.ts");
        assert_eq!(node.display_text, "auth-service.ts");
        assert_eq!(node.matched_property, "path");
    }

    #[test]
    fn link_search_shows_file_names() {
        let g = sample_graph();

        let results = search_graph_entities(&g, "ApiClient", 20);

        let link = results
            .iter()
            .find(|r| r.matched_property == "imports")
            .expect("import hit");
        assert_eq!(link.display_text, "auth-service.ts → api-client.ts");
        assert_eq!(link.matched_value, "ApiClient");
    }
}
