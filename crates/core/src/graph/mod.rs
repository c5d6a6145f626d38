//! # Graph model
//!
//! Undirected simple graph edited by the user. Nodes and edges carry
//! monotonic ids that are never reused. Edges refer to nodes by id only;
//! removing a node removes every edge incident to it, so the edge list can
//! never name a node that is not in the node list.

mod adjacency;
mod edge;
mod events;
pub mod geometry;
mod node;

use tokio::sync::broadcast;
use tracing::debug;

pub use adjacency::Adjacency;
pub use edge::{Edge, EdgeId};
pub use events::{GraphEvent, GraphSubscription};
pub use node::{Node, NodeId, Position};

use events::EVENT_CAPACITY;
use geometry::point_segment_distance;

/// Editable undirected simple graph.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node: u64,
    next_edge: u64,
    events: broadcast::Sender<GraphEvent>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty graph
    ///
    /// # Examples
    ///
    /// ```
    /// use graphwalk_core::Graph;
    ///
    /// let graph = Graph::new();
    /// assert_eq!(graph.node_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_node: 0,
            next_edge: 0,
            events,
        }
    }

    /// Subscribe to change notifications from this point on.
    #[must_use]
    pub fn subscribe(&self) -> GraphSubscription {
        GraphSubscription::new(self.events.subscribe())
    }

    fn publish(&self, event: GraphEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }

    /// Insert a node at `position` and return its freshly allocated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphwalk_core::{Graph, Position};
    ///
    /// let mut graph = Graph::new();
    /// let a = graph.add_node(Position::new(10.0, 10.0));
    /// let b = graph.add_node(Position::new(50.0, 10.0));
    /// assert!(a < b);
    /// ```
    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = NodeId::new(self.next_node);
        self.next_node = self.next_node.wrapping_add(1);
        self.nodes.push(Node::new(id, position));
        debug!(node = %id, x = position.x, y = position.y, "node added");
        self.publish(GraphEvent::NodeAdded { id, position });
        id
    }

    /// Remove a node and every edge incident to it. Absent ids are ignored.
    pub fn remove_node(&mut self, id: NodeId) {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.id() != id);
        if self.nodes.len() == before {
            return;
        }

        let removed_edges: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|edge| edge.touches(id))
            .map(Edge::id)
            .collect();
        self.edges.retain(|edge| !edge.touches(id));

        debug!(node = %id, cascaded = removed_edges.len(), "node removed");
        self.publish(GraphEvent::NodeRemoved { id, removed_edges });
    }

    /// Reposition an existing node. Absent ids are ignored.
    pub fn move_node(&mut self, id: NodeId, position: Position) {
        if let Some(node) = self.nodes.iter_mut().find(|node| node.id() == id) {
            node.set_position(position);
            self.publish(GraphEvent::NodeMoved { id, position });
        }
    }

    /// Most recently added node within `tolerance` of `point`.
    ///
    /// Scans newest-first so a freshly placed node wins over an older one it
    /// overlaps.
    #[must_use]
    pub fn find_node_near(&self, point: Position, tolerance: f64) -> Option<&Node> {
        self.nodes
            .iter()
            .rev()
            .find(|node| node.position().distance_to(point) <= tolerance)
    }

    /// Connect `a` and `b`.
    ///
    /// Self-loops, pairs already connected in either orientation, and pairs
    /// naming an absent node are ignored. Returns the id of the new edge
    /// when one was inserted.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        if a == b || self.edge_between(a, b).is_some() {
            return None;
        }
        if !self.contains_node(a) || !self.contains_node(b) {
            debug!(%a, %b, "edge to unknown node ignored");
            return None;
        }

        let id = EdgeId::new(self.next_edge);
        self.next_edge = self.next_edge.wrapping_add(1);
        self.edges.push(Edge::new(id, a, b));
        debug!(edge = %id, %a, %b, "edge added");
        self.publish(GraphEvent::EdgeAdded { id, a, b });
        Some(id)
    }

    /// Remove one edge instance. Absent ids are ignored.
    pub fn remove_edge(&mut self, id: EdgeId) {
        if let Some(index) = self.edges.iter().position(|edge| edge.id() == id) {
            self.edges.remove(index);
            debug!(edge = %id, "edge removed");
            self.publish(GraphEvent::EdgeRemoved { id });
        }
    }

    /// First edge, in insertion order, whose segment lies within `tolerance`
    /// of `point`.
    #[must_use]
    pub fn edge_near(&self, point: Position, tolerance: f64) -> Option<&Edge> {
        self.edges.iter().find(|edge| {
            let (a, b) = edge.endpoints();
            match (self.node(a), self.node(b)) {
                (Some(a), Some(b)) => {
                    point_segment_distance(point, a.position(), b.position()) <= tolerance
                }
                _ => false,
            }
        })
    }

    /// Undirected adjacency snapshot of the current graph.
    ///
    /// Every node appears, isolated ones with an empty neighbour set.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_parts(
            self.nodes.iter().map(Node::id),
            self.edges.iter().map(Edge::endpoints),
        )
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Edge joining `a` and `b` in either orientation.
    #[must_use]
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.connects(a, b))
    }

    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id() == id)
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
