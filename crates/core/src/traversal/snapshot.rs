//! Read-only view of a traversal for the presentation layer

use serde::{Deserialize, Serialize};

use super::algorithm::Algorithm;
use super::edge_key::EdgeKey;
use crate::graph::NodeId;

/// How a node should be drawn, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// Last node removed from the frontier.
    Current,
    Visited,
    Frontier,
    Unvisited,
}

impl NodeStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Visited => "Visited",
            Self::Frontier => "In frontier",
            Self::Unvisited => "Unvisited",
        }
    }
}

/// Every observable of a traversal, copied out at one instant.
///
/// Collections are ordered (`visited` and `explored` ascending, `parents` by
/// child id) so two snapshots of equal runs compare and serialise equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalSnapshot {
    pub algorithm: Algorithm,
    pub start: Option<NodeId>,
    /// Front first; for depth-first the last element is the top of the stack.
    pub frontier: Vec<NodeId>,
    pub visited: Vec<NodeId>,
    pub order: Vec<NodeId>,
    /// `(child, parent)`; `None` marks the root.
    pub parents: Vec<(NodeId, Option<NodeId>)>,
    pub explored: Vec<EdgeKey>,
    pub current: Option<NodeId>,
    pub exhausted: bool,
}

impl TraversalSnapshot {
    /// Empty view, used before any traversal has started.
    #[must_use]
    pub const fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            start: None,
            frontier: Vec::new(),
            visited: Vec::new(),
            order: Vec::new(),
            parents: Vec::new(),
            explored: Vec::new(),
            current: None,
            exhausted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(NodeStatus::Frontier.label(), "In frontier");
        assert_eq!(NodeStatus::Unvisited.label(), "Unvisited");
    }

    #[test]
    fn test_empty_snapshot_is_exhausted() {
        let snapshot = TraversalSnapshot::empty(Algorithm::Dfs);
        assert!(snapshot.exhausted);
        assert!(snapshot.frontier.is_empty());
        assert_eq!(snapshot.algorithm, Algorithm::Dfs);
    }
}
