//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `insights`: Structural report (components, communities, hubs, isolated nodes)
//! - `search`: Text search over nodes and links
//! - `connected`: Node ids linked to a selected node, or the endpoints of a link
//! - `neighbors`: Node ids within N hops of a node
//! - `show`: Details of one node
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config <path>`: Configuration file (default `./depscope.yaml`)
//! - `--filter <text>`, `--exclude`, `--declarations`: Narrow the graph first
//! - `--node-id`, `--source`, `--target`: Property names for generic graphs
//!
//! # Example
//!
//! ```bash
//! depscope insights deps.json
//! depscope search deps.json auth --limit 5
//! depscope neighbors deps.json src/app.tsx --depth 2
//! depscope --filter src/components show deps.json src/components/Header.tsx
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

pub use args::{ConnectedArgs, InsightsArgs, LoadFlags, NeighborsArgs, SearchArgs, ShowArgs};

/// Depscope - Explore the structure of module dependency graphs
///
/// Reads a dependency graph exported as JSON (or any generic node/link
/// graph) and reports components, communities, hubs and neighbourhoods.
#[derive(Parser, Debug)]
#[command(name = "depscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./depscope.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Graph loading and filtering flags
    #[command(flatten)]
    pub load: LoadFlags,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze graph structure
    ///
    /// Prints summary lines, connected components, detected communities,
    /// hub nodes and isolated nodes.
    Insights(InsightsArgs),

    /// Search nodes and links
    ///
    /// Case-insensitive substring match over node ids, paths, names and
    /// labels, and link types, endpoints and imported names.
    Search(SearchArgs),

    /// List node ids directly connected to a node or link
    ///
    /// For a node: the other endpoint of every link touching it. For a link:
    /// both endpoints.
    Connected(ConnectedArgs),

    /// List the node and every node id within a number of hops
    Neighbors(NeighborsArgs),

    /// Show details of a node
    ///
    /// Displays the path, exported declarations, degree and the links in
    /// both directions.
    Show(ShowArgs),
}

impl Commands {
    /// Graph file the command reads.
    pub fn file(&self) -> &Path {
        match self {
            Self::Insights(args) => &args.file,
            Self::Search(args) => &args.file,
            Self::Connected(args) => &args.file,
            Self::Neighbors(args) => &args.file,
            Self::Show(args) => &args.file,
        }
    }
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Tracing filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::config::Config;
        use crate::output::OutputMode;

        let output_mode = OutputMode::from_json_flag(self.json);
        let config = Config::discover(self.config.as_deref(), &std::env::current_dir()?)?;
        let app = App::load(self.command.file(), &self.load.to_options(), config)?;
        info!(
            nodes = app.graph().nodes.len(),
            links = app.graph().links.len(),
            warnings = app.warnings().len(),
            "Graph ready"
        );

        match &self.command {
            Commands::Insights(args) => execute::execute_insights(&app, args, output_mode),
            Commands::Search(args) => execute::execute_search(&app, args, output_mode),
            Commands::Connected(args) => execute::execute_connected(&app, args, output_mode),
            Commands::Neighbors(args) => execute::execute_neighbors(&app, args, output_mode),
            Commands::Show(args) => execute::execute_show(&app, args, output_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_insights_with_global_flags() {
        let cli = Cli::try_parse_from(["depscope", "insights", "g.json", "--json", "-vv"]).unwrap();

        assert!(cli.json);
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.command.file(), Path::new("g.json"));
    }

    #[rstest]
    #[case::quiet(&[], "warn")]
    #[case::info(&["-v"], "info")]
    #[case::trace(&["-vvvv"], "trace")]
    fn verbosity_maps_to_level(#[case] flags: &[&str], #[case] expected: &str) {
        let mut argv = vec!["depscope"];
        argv.extend_from_slice(flags);
        argv.extend(["insights", "g.json"]);

        assert_eq!(Cli::try_parse_from(argv).unwrap().log_level(), expected);
    }

    #[test]
    fn connected_requires_a_selection() {
        assert!(Cli::try_parse_from(["depscope", "connected", "g.json"]).is_err());
        assert!(
            Cli::try_parse_from(["depscope", "connected", "g.json", "--node", "a", "--link", "a-b"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["depscope", "connected", "g.json", "--link", "a-b"]).unwrap();
        let Commands::Connected(args) = cli.command else {
            panic!("expected connected");
        };
        assert_eq!(args.link.as_deref(), Some("a-b"));
        assert!(args.node.is_none());
    }

    #[test]
    fn neighbors_accepts_negative_depth() {
        let cli =
            Cli::try_parse_from(["depscope", "neighbors", "g.json", "a", "--depth", "-1"]).unwrap();
        let Commands::Neighbors(args) = cli.command else {
            panic!("expected neighbors");
        };
        assert_eq!(args.depth, Some(-1));
    }

    #[test]
    fn load_flags_become_options() {
        let cli = Cli::try_parse_from([
            "depscope",
            "search",
            "g.json",
            "auth",
            "--filter",
            "test",
            "--exclude",
            "--source",
            "from",
        ])
        .unwrap();

        let options = cli.load.to_options();

        assert_eq!(options.filter.text, "test");
        assert!(!options.filter.include_mode);
        assert_eq!(options.mapping.link_source.as_deref(), Some("from"));
        assert!(options.mapping.node_id.is_none());
    }

    #[test]
    fn exclude_without_filter_is_rejected() {
        assert!(Cli::try_parse_from(["depscope", "insights", "g.json", "--exclude"]).is_err());
    }
}
