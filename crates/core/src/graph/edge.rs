//! Edge data structure for the undirected graph

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// Identity of one edge instance, allocated monotonically and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

impl EdgeId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// An undirected edge between two distinct nodes.
///
/// Endpoints are kept in the orientation the edge was inserted with; use
/// [`Edge::connects`] for orientation-free comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    a: NodeId,
    b: NodeId,
}

impl Edge {
    pub(crate) const fn new(id: EdgeId, a: NodeId, b: NodeId) -> Self {
        Self { id, a, b }
    }

    #[must_use]
    pub const fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpoints in insertion orientation.
    #[must_use]
    pub const fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// True if this edge joins `x` and `y`, in either orientation.
    #[must_use]
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// True if `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: u64, b: u64) -> Edge {
        Edge::new(EdgeId::new(0), NodeId::new(a), NodeId::new(b))
    }

    #[test]
    fn test_connects_is_orientation_free() {
        let e = edge(1, 2);
        assert!(e.connects(NodeId::new(1), NodeId::new(2)));
        assert!(e.connects(NodeId::new(2), NodeId::new(1)));
        assert!(!e.connects(NodeId::new(1), NodeId::new(3)));
    }

    #[test]
    fn test_touches() {
        let e = edge(4, 9);
        assert!(e.touches(NodeId::new(4)));
        assert!(e.touches(NodeId::new(9)));
        assert!(!e.touches(NodeId::new(5)));
    }

    #[test]
    fn test_endpoints_keep_insertion_orientation() {
        let e = edge(7, 3);
        assert_eq!(e.endpoints(), (NodeId::new(7), NodeId::new(3)));
        assert_eq!(e.id().to_string(), "e0");
    }
}
