//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::{ArgGroup, Args, Parser};
use depscope_graph::{MappingOverrides, NodeFilter};
use std::path::PathBuf;

use crate::app::LoadOptions;

/// Flags that shape how the graph file is read, shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct LoadFlags {
    /// Keep only nodes whose path contains this text (case-insensitive)
    #[arg(long, global = true)]
    pub filter: Option<String>,

    /// Drop matching nodes instead of keeping them
    #[arg(long, global = true, requires = "filter")]
    pub exclude: bool,

    /// Match the filter against declaration names instead of paths
    #[arg(long, global = true, requires = "filter")]
    pub declarations: bool,

    /// Node property holding the id (generic graphs)
    #[arg(long, global = true, value_name = "PROPERTY")]
    pub node_id: Option<String>,

    /// Link property holding the source id (generic graphs)
    #[arg(long, global = true, value_name = "PROPERTY")]
    pub source: Option<String>,

    /// Link property holding the target id (generic graphs)
    #[arg(long, global = true, value_name = "PROPERTY")]
    pub target: Option<String>,
}

impl LoadFlags {
    /// Convert the flags into loader options.
    pub fn to_options(&self) -> LoadOptions {
        let filter = NodeFilter {
            text: self.filter.clone().unwrap_or_default(),
            include_mode: !self.exclude,
            filter_declarations: self.declarations,
        };
        let mapping = MappingOverrides {
            node_id: self.node_id.clone(),
            link_source: self.source.clone(),
            link_target: self.target.clone(),
        };
        LoadOptions { mapping, filter }
    }
}

/// Arguments for the `insights` command
#[derive(Parser, Debug, Clone)]
pub struct InsightsArgs {
    /// Graph JSON file
    pub file: PathBuf,
}

/// Arguments for the `search` command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Graph JSON file
    pub file: PathBuf,

    /// Text to look for in ids, paths, names, labels and link properties
    pub term: String,

    /// Maximum number of results (default from config, 20)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the `connected` command
#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("selection").required(true).args(["node", "link"])))]
pub struct ConnectedArgs {
    /// Graph JSON file
    pub file: PathBuf,

    /// Selected node id
    #[arg(long)]
    pub node: Option<String>,

    /// Selected link id, `<source>-<target>`
    #[arg(long)]
    pub link: Option<String>,
}

/// Arguments for the `neighbors` command
#[derive(Parser, Debug, Clone)]
pub struct NeighborsArgs {
    /// Graph JSON file
    pub file: PathBuf,

    /// Seed node id
    pub node: String,

    /// Hops from the seed node (default from config, 1)
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Graph JSON file
    pub file: PathBuf,

    /// Node id
    pub node: String,
}
