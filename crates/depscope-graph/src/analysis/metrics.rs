//! Whole-graph metrics.

/// Round `value` to `decimals` places (halves away from zero).
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Number of unordered pairs among `n` items, C(n, 2).
pub(crate) fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Average degree as `2 * links / nodes`, rounded to 2 decimals.
///
/// Zero when the graph has no links or no nodes.
#[allow(clippy::cast_precision_loss)]
pub fn average_degree(node_count: usize, link_count: usize) -> f64 {
    if link_count == 0 || node_count == 0 {
        return 0.0;
    }
    round_to((link_count * 2) as f64 / node_count as f64, 2)
}

/// Graph density as `links / C(nodes, 2)`, rounded to 3 decimals.
///
/// Raw links are counted, so parallel links and import/export pairs between
/// the same two files push the value up, past 1.0 in extreme cases.
#[allow(clippy::cast_precision_loss)]
pub fn graph_density(node_count: usize, link_count: usize) -> f64 {
    let possible = pair_count(node_count);
    if possible == 0 {
        return 0.0;
    }
    round_to(link_count as f64 / possible as f64, 3)
}
