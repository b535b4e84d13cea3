//! Human-readable summary lines for an insights report.

use super::GraphInsights;
use crate::model::last_segment;

/// Density above which a graph is called highly connected.
const DENSE_THRESHOLD: f64 = 0.7;

/// Density below which a graph is called sparse.
const SPARSE_THRESHOLD: f64 = 0.1;

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64
}

/// Summarize an insights report as one short line per observation.
pub fn insights_summary(insights: &GraphInsights) -> Vec<String> {
    if insights.total_nodes == 0 {
        return vec!["No graph data available".to_string()];
    }

    let mut lines = vec![format!(
        "📊 {} nodes, {} connections",
        insights.total_nodes, insights.total_links
    )];

    if insights.connected_components.len() > 1 {
        lines.push(format!(
            "🔗 {} separate components",
            insights.connected_components.len()
        ));
        if let Some(largest) = &insights.largest_component {
            lines.push(format!(
                "📈 Largest component: {} nodes ({}%)",
                largest.size,
                (ratio(largest.size, insights.total_nodes) * 100.0).round()
            ));
        }
    } else {
        lines.push("🔗 All nodes are connected".to_string());
    }

    if !insights.isolated_nodes.is_empty() {
        lines.push(format!("🏝️ {} isolated nodes", insights.isolated_nodes.len()));
    }

    if !insights.communities.is_empty() {
        let count = insights.communities.len();
        let members: usize = insights.communities.iter().map(|c| c.size).sum();
        lines.push(format!("👥 {count} communities detected"));
        lines.push(format!(
            "📏 Average community size: {} nodes",
            ratio(members, count).round()
        ));
    }

    if let Some(hub) = &insights.most_connected_node {
        lines.push(format!(
            "⭐ Most connected: {} ({} connections)",
            last_segment(&hub.id),
            hub.degree
        ));
    }

    let density = (insights.density * 100.0).round();
    if insights.density > DENSE_THRESHOLD {
        lines.push(format!("🎯 Highly connected graph ({density}% density)"));
    } else if insights.density < SPARSE_THRESHOLD {
        lines.push(format!("🕸️ Sparse graph ({density}% density)"));
    } else {
        lines.push(format!("⚖️ Moderately connected ({density}% density)"));
    }

    lines
}
