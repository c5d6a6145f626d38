#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # graphwalk-core
//!
//! The two pieces of graphwalk with real invariants:
//!
//! - [`graph`]: an undirected simple graph with stable node and edge
//!   identities, spatial picking, and explicit change notifications.
//! - [`traversal`]: a step-driven breadth-first / depth-first state machine
//!   bound to a point-in-time adjacency snapshot.
//!
//! Every operation here is total. Absent ids, empty frontiers and
//! self-referential edges are no-ops, never errors.

pub mod graph;
pub mod traversal;

pub use graph::{
    Adjacency, Edge, EdgeId, Graph, GraphEvent, GraphSubscription, Node, NodeId, Position,
};
pub use traversal::{
    Algorithm, EdgeKey, NodeStatus, ParseAlgorithmError, Traversal, TraversalSnapshot,
};
