//! Change notifications for graph observers.
//!
//! Widgets that mirror the node list (a start-vertex picker, a node count)
//! subscribe explicitly instead of hooking the container. Events are only
//! published for mutations that actually changed the graph.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::debug;

use super::edge::EdgeId;
use super::node::{NodeId, Position};

/// Buffered events per subscriber before the oldest are dropped.
pub(crate) const EVENT_CAPACITY: usize = 256;

/// A single effective graph mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GraphEvent {
    NodeAdded {
        id: NodeId,
        position: Position,
    },
    /// Carries the ids of the incident edges removed with the node.
    NodeRemoved {
        id: NodeId,
        removed_edges: Vec<EdgeId>,
    },
    NodeMoved {
        id: NodeId,
        position: Position,
    },
    EdgeAdded {
        id: EdgeId,
        a: NodeId,
        b: NodeId,
    },
    EdgeRemoved {
        id: EdgeId,
    },
}

impl GraphEvent {
    /// True for events that change the node list itself.
    #[must_use]
    pub const fn changes_node_list(&self) -> bool {
        matches!(self, Self::NodeAdded { .. } | Self::NodeRemoved { .. })
    }
}

/// Handle for receiving graph events.
#[derive(Debug)]
pub struct GraphSubscription {
    receiver: broadcast::Receiver<GraphEvent>,
    lagged: u64,
}

impl GraphSubscription {
    pub(crate) const fn new(receiver: broadcast::Receiver<GraphEvent>) -> Self {
        Self {
            receiver,
            lagged: 0,
        }
    }

    /// Next pending event, if any.
    ///
    /// A subscriber that fell behind skips the dropped events; the count is
    /// available from [`GraphSubscription::lagged`] so it can resynchronise
    /// from the graph directly.
    pub fn try_next(&mut self) -> Option<GraphEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "graph subscriber lagged");
                    self.lagged = self.lagged.saturating_add(skipped);
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Drains every pending event.
    pub fn drain(&mut self) -> Vec<GraphEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    /// Total events skipped because this subscriber lagged.
    #[must_use]
    pub const fn lagged(&self) -> u64 {
        self.lagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_node_list() {
        let added = GraphEvent::NodeAdded {
            id: NodeId::new(0),
            position: Position::origin(),
        };
        let moved = GraphEvent::NodeMoved {
            id: NodeId::new(0),
            position: Position::origin(),
        };
        let edge = GraphEvent::EdgeRemoved { id: EdgeId::new(1) };

        assert!(added.changes_node_list());
        assert!(!moved.changes_node_list());
        assert!(!edge.changes_node_list());
    }

    #[test]
    fn test_lagged_subscriber_skips_dropped_events() {
        let (sender, receiver) = broadcast::channel(2);
        let mut subscription = GraphSubscription::new(receiver);

        for raw in 0..5 {
            let _ = sender.send(GraphEvent::EdgeRemoved {
                id: EdgeId::new(raw),
            });
        }

        let events = subscription.drain();
        assert_eq!(
            events,
            vec![
                GraphEvent::EdgeRemoved { id: EdgeId::new(3) },
                GraphEvent::EdgeRemoved { id: EdgeId::new(4) },
            ]
        );
        assert_eq!(subscription.lagged(), 3);
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = GraphEvent::EdgeAdded {
            id: EdgeId::new(2),
            a: NodeId::new(0),
            b: NodeId::new(1),
        };
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert!(json.contains("\"type\":\"edge_added\""));
    }
}
