//! Node identity and placement

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable node identifier.
///
/// Allocated monotonically by [`Graph`](super::Graph) and never reused, so
/// an id that once named a removed node can never alias a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Position in 2D world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a position at the origin
    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True when both coordinates are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A placed node.
///
/// The position belongs to the presentation layer; traversal never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    position: Position,
}

impl Node {
    pub(crate) const fn new(id: NodeId, position: Position) -> Self {
        Self { id, position }
    }

    /// Returns the node's ID
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node's position
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    pub(crate) const fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_orders_numerically() {
        let mut ids = vec![NodeId::new(10), NodeId::new(2), NodeId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![NodeId::new(2), NodeId::new(7), NodeId::new(10)]);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(42).to_string(), "42");
        assert_eq!(format!("{:>4}", NodeId::new(7)), "   7");
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_position_finite_check() {
        assert!(Position::new(-10.0, 20.0).is_finite());
        assert!(!Position::new(f64::NAN, 0.0).is_finite());
        assert!(!Position::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_node_position_update() {
        let mut node = Node::new(NodeId::new(6), Position::origin());
        node.set_position(Position::new(42.0, 43.0));

        assert_eq!(node.position(), Position::new(42.0, 43.0));
        assert_eq!(node.id(), NodeId::new(6));
    }
}
