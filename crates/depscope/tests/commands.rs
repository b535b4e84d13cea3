//! End-to-end command tests against graph files on disk.

use depscope::Error;
use depscope::app::{App, LoadOptions};
use depscope::cli::Cli;
use depscope::config::Config;
use depscope_graph::NodeFilter;
use rstest::rstest;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn sample_graph_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../depscope-graph/tests/fixtures/sample_graph.json")
}

fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Run a command with an empty configuration file so the working
/// directory never leaks settings into the test.
fn run(args: &[&str]) -> anyhow::Result<()> {
    let config = create_temp_file("{}\n");
    let graph = sample_graph_path();
    let config_path = config.path().to_str().unwrap().to_string();
    let graph_path = graph.to_str().unwrap().to_string();

    let mut argv = vec!["depscope", "--config", config_path.as_str()];
    argv.push(args[0]);
    argv.push(graph_path.as_str());
    argv.extend_from_slice(&args[1..]);

    Cli::try_parse_from(argv).unwrap().execute()
}

#[rstest]
#[case::insights(&["insights"])]
#[case::insights_json(&["insights", "--json"])]
#[case::search(&["search", "auth", "--limit", "3"])]
#[case::connected_node(&["connected", "--node", "src/app.tsx"])]
#[case::connected_link(&["connected", "--link", "src/app.tsx-src/components/Header.tsx"])]
#[case::neighbors(&["neighbors", "src/app.tsx", "--depth", "2"])]
#[case::show(&["show", "src/services/auth-service.ts", "--json"])]
fn commands_succeed_on_sample_graph(#[case] args: &[&str]) {
    run(args).unwrap();
}

#[rstest]
#[case::show(&["show", "src/missing.ts"])]
#[case::neighbors(&["neighbors", "src/missing.ts"])]
#[case::connected(&["connected", "--node", "src/missing.ts"])]
fn unknown_node_is_an_error(#[case] args: &[&str]) {
    let err = run(args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::NodeNotFound(id)) if id == "src/missing.ts"
    ));
}

#[test]
fn unknown_link_is_an_error() {
    let err = run(&["connected", "--link", "nope-nothing"]).unwrap_err();

    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::LinkNotFound(_))));
}

#[test]
fn invalid_graph_reports_cause() {
    let graph = create_temp_file("{\"nodes\": 5}");
    let config = create_temp_file("{}\n");

    let err = Cli::try_parse_from([
        "depscope",
        "--config",
        config.path().to_str().unwrap(),
        "insights",
        graph.path().to_str().unwrap(),
    ])
    .unwrap()
    .execute()
    .unwrap_err();

    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Graph(_))));
    assert!(err.chain().count() >= 2);
}

#[test]
fn filter_narrows_sample_graph() {
    let options = LoadOptions {
        filter: NodeFilter::new("components/"),
        ..LoadOptions::default()
    };

    let app = App::load(&sample_graph_path(), &options, Config::default()).unwrap();

    let ids: Vec<&str> = app.graph().nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["src/components/LoginForm.tsx", "src/components/Header.tsx"]
    );
    assert!(app.graph().links.is_empty());
}

#[test]
fn exclude_filter_drops_matching_nodes() {
    let options = LoadOptions {
        filter: NodeFilter {
            text: "utils".to_string(),
            include_mode: false,
            filter_declarations: false,
        },
        ..LoadOptions::default()
    };

    let app = App::load(&sample_graph_path(), &options, Config::default()).unwrap();

    assert_eq!(app.graph().nodes.len(), 11);
    assert_eq!(app.graph().links.len(), 6);
}
