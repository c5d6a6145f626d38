//! Random sample graphs for quick experiments.

use rand::Rng;
use tracing::debug;

use graphwalk_core::{Graph, NodeId, Position};

use crate::config::SampleConfig;
use crate::error::{Error, Result};

/// Generate a random graph from `config` using `rng`.
///
/// Nodes are scattered uniformly inside the padded canvas; each unordered
/// pair is then connected with probability `config.density`. Node ids run
/// `0..config.nodes` because the graph is fresh.
///
/// # Errors
///
/// Returns an error if the density lies outside `[0, 1]`, the node count
/// exceeds `max_nodes`, or the padded canvas has no finite area.
pub fn sample_graph<R: Rng>(config: &SampleConfig, rng: &mut R) -> Result<Graph> {
    if !(0.0..=1.0).contains(&config.density) {
        return Err(Error::invalid_sample(format!(
            "density must be within [0, 1], got {}",
            config.density
        )));
    }

    config.check_node_count(u64::try_from(config.nodes).unwrap_or(u64::MAX))?;
    let (span_x, span_y) = config.padded_span()?;

    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..config.nodes)
        .map(|_| {
            let x = config.padding + rng.gen_range(0.0..span_x);
            let y = config.padding + rng.gen_range(0.0..span_y);
            graph.add_node(Position::new(x, y))
        })
        .collect();

    for (i, &a) in ids.iter().enumerate() {
        for &b in ids.iter().skip(i.saturating_add(1)) {
            if rng.gen_bool(config.density) {
                graph.add_edge(a, b);
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        density = config.density,
        "sample graph generated"
    );
    Ok(graph)
}
