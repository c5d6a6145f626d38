//! Plain-text rendering of a session for the terminal.

use std::fmt::Write as _;

use itertools::Itertools;

use graphwalk_core::{EdgeKey, NodeStatus};

use crate::session::Session;

/// Single-character marker per node status.
const fn status_marker(status: NodeStatus) -> char {
    match status {
        NodeStatus::Current => '*',
        NodeStatus::Visited => '#',
        NodeStatus::Frontier => '+',
        NodeStatus::Unvisited => '.',
    }
}

/// Render the frontier and visited panels plus a per-node and per-edge
/// listing.
///
/// Edges are tagged `tree` when they appear in the parent map, `explored`
/// when merely examined, and left bare otherwise.
#[must_use]
pub fn render_frame(session: &Session) -> String {
    let panels = session.panels();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}: [{}]",
        panels.frontier_label,
        panels.frontier.iter().join(" ")
    );
    let _ = writeln!(out, "Visited: {}", panels.visited_log);

    let traversal = session.traversal();
    let _ = writeln!(
        out,
        "Nodes ({}):{}",
        session.graph().node_count(),
        if traversal.is_some() { "" } else { " (no traversal)" }
    );
    for node in session.graph().nodes() {
        let status = traversal.map_or(NodeStatus::Unvisited, |t| t.node_status(node.id()));
        let p = node.position();
        let _ = writeln!(
            out,
            "  {} {:>3}  ({:.0}, {:.0})",
            status_marker(status),
            node.id(),
            p.x,
            p.y
        );
    }

    let _ = writeln!(out, "Edges ({}):", session.graph().edge_count());
    for edge in session.graph().edges() {
        let (a, b) = edge.endpoints();
        let key = EdgeKey::new(a, b);
        let tag = traversal.map_or("", |t| {
            if t.parent_of(a) == Some(b) || t.parent_of(b) == Some(a) {
                " tree"
            } else if t.explored().contains(&key) {
                " explored"
            } else {
                ""
            }
        });
        let _ = writeln!(out, "  {key}{tag}");
    }

    out
}
