//! Output formatting for CLI commands.
//!
//! Every command prints either human-readable text or pretty JSON for
//! programmatic use. Text printers write to any [`Write`] so they can be
//! exercised against a buffer.

pub mod color;

use color::{bold, dimmed};
pub use color::{error, info, success, warning};

use depscope_graph::analysis::{ClusterInfo, GraphInsights, insights_summary};
use depscope_graph::search::EntityKind;
use depscope_graph::format::{FormattedLink, FormattedNode, format_link, format_node, format_path_segment};
use depscope_graph::analysis::build_adjacency;
use depscope_graph::{Graph, IdSet, Node, SearchResult};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 100;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(max_width: usize, use_colors: bool) -> Self {
        Self {
            max_width,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `DEPSCOPE_MAX_WIDTH`: Maximum content width (default: 100)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `DEPSCOPE_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let max_width = match env::var("DEPSCOPE_MAX_WIDTH") {
            Ok(s) if !s.is_empty() => s.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    env_var = "DEPSCOPE_MAX_WIDTH",
                    value = %s,
                    default = DEFAULT_MAX_CONTENT_WIDTH,
                    "Invalid value, using default"
                );
                DEFAULT_MAX_CONTENT_WIDTH
            }),
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        // https://no-color.org/
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("DEPSCOPE_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            max_width,
            use_colors,
        }
    }

    fn content_width(&self) -> usize {
        get_terminal_width().min(self.max_width)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map_or(usize::from(DEFAULT_TERMINAL_WIDTH), |(w, _)| usize::from(w.0))
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

impl OutputMode {
    /// Pick the mode from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Everything the `show` command reports about one node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails<'g> {
    /// The node as loaded
    pub node: &'g Node,
    /// Display split of the id and exported declarations
    pub display: FormattedNode,
    /// Number of distinct neighbours
    pub degree: usize,
    /// Links that start at this node, in display direction
    pub outgoing: Vec<FormattedLink>,
    /// Links that end at this node, in display direction
    pub incoming: Vec<FormattedLink>,
}

impl<'g> NodeDetails<'g> {
    /// Collect the details of `node` within `graph`.
    pub fn new(graph: &'g Graph, node: &'g Node) -> Self {
        let mut outgoing = Vec::new();
        let mut incoming = Vec::new();
        for link in graph.links_of(&node.id) {
            if link.source_id() == node.id {
                outgoing.push(format_link(link));
            }
            if link.target_id() == node.id {
                incoming.push(format_link(link));
            }
        }

        let degree = build_adjacency(&graph.nodes, &graph.links).degree(&node.id);

        Self {
            node,
            display: format_node(node),
            degree,
            outgoing,
            incoming,
        }
    }
}

/// Print the structural analysis report.
pub fn print_insights(insights: &GraphInsights, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_insights_text(&mut handle, insights, &config),
        OutputMode::Json => write_json(&mut handle, insights),
    }
}

/// Print search hits.
pub fn print_search_results(results: &[SearchResult<'_>], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_search_text(&mut handle, results, &config),
        OutputMode::Json => write_json(&mut handle, results),
    }
}

/// Print a set of node and link ids under a title.
pub fn print_ids(title: &str, ids: &IdSet, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_ids_text(&mut handle, title, ids, &config),
        OutputMode::Json => write_json(&mut handle, ids),
    }
}

/// Print the details of one node.
pub fn print_node_details(details: &NodeDetails<'_>, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_node_text(&mut handle, details, &config),
        OutputMode::Json => write_json(&mut handle, details),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_insights_text<W: Write>(
    w: &mut W,
    insights: &GraphInsights,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Graph Insights", config))?;
    for line in insights_summary(insights) {
        writeln!(w, "  {line}")?;
    }

    if insights.total_nodes == 0 {
        return Ok(());
    }

    print_clusters(w, "Components", &insights.connected_components, config)?;
    print_clusters(w, "Communities", &insights.communities, config)?;

    if !insights.hub_nodes.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}:", bold("Hubs", config))?;
        for hub in &insights.hub_nodes {
            writeln!(
                w,
                "  {} {}",
                color::warning(&format_path_segment(&hub.id), config),
                dimmed(&format!("({} connections)", hub.degree), config)
            )?;
        }
    }

    if !insights.isolated_nodes.is_empty() {
        writeln!(w)?;
        writeln!(
            w,
            "{} ({}):",
            bold("Isolated nodes", config),
            insights.isolated_nodes.len()
        )?;
        let listing = insights.isolated_nodes.join(", ");
        for line in textwrap::wrap(&listing, config.content_width().saturating_sub(2)) {
            writeln!(w, "  {line}")?;
        }
    }

    Ok(())
}

fn print_clusters<W: Write>(
    w: &mut W,
    title: &str,
    clusters: &[ClusterInfo],
    config: &OutputConfig,
) -> io::Result<()> {
    if clusters.is_empty() {
        return Ok(());
    }

    writeln!(w)?;
    writeln!(w, "{} ({}):", bold(title, config), clusters.len())?;
    for cluster in clusters {
        let label = cluster.name.as_deref().unwrap_or(&cluster.id);
        write!(
            w,
            "  {}  {} nodes  {} {:.3}",
            color::success(label, config),
            cluster.size,
            dimmed("density", config),
            cluster.density
        )?;
        match &cluster.central_node {
            Some(central) if cluster.size > 1 => writeln!(
                w,
                "  {} {}",
                dimmed("central:", config),
                color::info(central, config)
            )?,
            _ => writeln!(w)?,
        }
    }
    Ok(())
}

fn print_search_text<W: Write>(
    w: &mut W,
    results: &[SearchResult<'_>],
    config: &OutputConfig,
) -> io::Result<()> {
    if results.is_empty() {
        writeln!(w, "{}", color::error("No matches found.", config))?;
        return Ok(());
    }

    writeln!(w, "Found {} match(es):", results.len())?;
    writeln!(w)?;
    for result in results {
        let kind = match result.kind {
            EntityKind::Node => "node",
            EntityKind::Link => "link",
        };
        writeln!(
            w,
            "  {:<4}  {}  {}",
            kind,
            color::info(&result.display_text, config),
            dimmed(
                &format!("{}: {}", result.matched_property, result.matched_value),
                config
            )
        )?;
    }
    Ok(())
}

fn print_ids_text<W: Write>(
    w: &mut W,
    title: &str,
    ids: &IdSet,
    config: &OutputConfig,
) -> io::Result<()> {
    if ids.is_empty() {
        writeln!(w, "{}: none", bold(title, config))?;
        return Ok(());
    }

    writeln!(w, "{} ({}):", bold(title, config), ids.len())?;
    for id in ids {
        writeln!(w, "  {}", color::info(id, config))?;
    }
    Ok(())
}

fn print_node_text<W: Write>(
    w: &mut W,
    details: &NodeDetails<'_>,
    config: &OutputConfig,
) -> io::Result<()> {
    let display = &details.display;
    if display.path_parent.is_empty() {
        writeln!(w, "{}", color::info(&display.path_file, config))?;
    } else {
        writeln!(
            w,
            "{} {}",
            color::info(&display.path_file, config),
            dimmed(&format!("({})", display.path_parent), config)
        )?;
    }

    writeln!(w, "{} {}", dimmed("Degree:", config), details.degree)?;
    if let Some(label) = &details.node.label {
        writeln!(w, "{} {label}", dimmed("Label:", config))?;
    }
    if let Some(name) = &details.node.name {
        writeln!(w, "{} {name}", dimmed("Name:", config))?;
    }

    if !display.declarations.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}:", bold("Exports", config))?;
        for (kind, names) in &display.declarations {
            writeln!(w, "  {} {names}", dimmed(&format!("{kind}:"), config))?;
        }
    }

    print_link_section(w, "Outgoing", &details.outgoing, config)?;
    print_link_section(w, "Incoming", &details.incoming, config)
}

fn print_link_section<W: Write>(
    w: &mut W,
    title: &str,
    links: &[FormattedLink],
    config: &OutputConfig,
) -> io::Result<()> {
    if links.is_empty() {
        return Ok(());
    }

    writeln!(w)?;
    writeln!(w, "{} ({}):", bold(title, config), links.len())?;
    for link in links {
        writeln!(
            w,
            "  {} {} {}",
            link.from,
            dimmed("→", config),
            link.to
        )?;
    }
    Ok(())
}
