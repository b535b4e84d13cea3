//! Command execution functions.
//!
//! Each function takes a loaded [`App`] and its command's arguments, runs
//! the query and prints the result.

use anyhow::Result;
use depscope_graph::{
    Selection, analyze_graph_structure_with, find_connected_entities, find_neighbors_at_depth,
    search_graph_entities,
};
use tracing::debug;

use super::args::{ConnectedArgs, InsightsArgs, NeighborsArgs, SearchArgs, ShowArgs};
use crate::app::App;
use crate::error::Error;
use crate::output::{self, NodeDetails, OutputMode};

/// Execute the insights command
pub fn execute_insights(app: &App, _args: &InsightsArgs, output_mode: OutputMode) -> Result<()> {
    let insights = analyze_graph_structure_with(app.graph(), &app.config().analysis);
    output::print_insights(&insights, output_mode)?;
    Ok(())
}

/// Execute the search command
pub fn execute_search(app: &App, args: &SearchArgs, output_mode: OutputMode) -> Result<()> {
    let limit = args.limit.unwrap_or(app.config().search.max_results);
    let results = search_graph_entities(app.graph(), &args.term, limit);
    output::print_search_results(&results, output_mode)?;
    Ok(())
}

/// Execute the connected command
pub fn execute_connected(app: &App, args: &ConnectedArgs, output_mode: OutputMode) -> Result<()> {
    let selection = match (&args.node, &args.link) {
        (Some(node), _) => {
            app.require_node(node)?;
            Selection::Node(node)
        }
        (None, Some(link)) => {
            if !app.graph().links.iter().any(|l| l.id() == *link) {
                return Err(Error::LinkNotFound(link.clone()).into());
            }
            Selection::Link(link)
        }
        (None, None) => Selection::None,
    };

    let connected = find_connected_entities(app.graph(), selection);
    debug!(count = connected.len(), "Collected connected entities");
    output::print_ids("Connected", &connected, output_mode)?;
    Ok(())
}

/// Execute the neighbors command
pub fn execute_neighbors(app: &App, args: &NeighborsArgs, output_mode: OutputMode) -> Result<()> {
    app.require_node(&args.node)?;
    let depth = args.depth.unwrap_or(app.config().neighbors.depth);

    let neighbors = find_neighbors_at_depth(app.graph(), &args.node, depth);
    output::print_ids(&format!("Neighbors within {depth} hop(s)"), &neighbors, output_mode)?;
    Ok(())
}

/// Execute the show command
pub fn execute_show(app: &App, args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let node = app.require_node(&args.node)?;
    let details = NodeDetails::new(app.graph(), node);
    output::print_node_details(&details, output_mode)?;
    Ok(())
}
