//! # Traversal engine
//!
//! Step-driven breadth-first / depth-first search over an [`Adjacency`]
//! snapshot. The engine has no notion of pausing: a driver (timer or user
//! action) calls [`Traversal::step`] until it returns `false`.
//!
//! ## Step
//!
//! 1. Remove one node `u` from the frontier: front for BFS, back for DFS.
//!    An empty frontier makes the step a no-op returning `false`.
//! 2. If `u` was already visited the step only spends the frontier slot.
//! 3. Otherwise `u` is visited and appended to the order, and its neighbours
//!    are examined in ascending id order. Every examined edge is explored;
//!    a neighbour that is neither visited nor already queued joins the
//!    frontier and records `u` as its parent unless it already has one.
//!
//! Depth-first pushes the neighbours discovered in one step in reverse so
//! the lowest id sits on top of the stack and is expanded first.

mod algorithm;
mod edge_key;
mod snapshot;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::{debug, trace};

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use edge_key::EdgeKey;
pub use snapshot::{NodeStatus, TraversalSnapshot};

use crate::graph::{Adjacency, Graph, NodeId};

/// One run of a graph search.
///
/// All run state is owned here and discarded by [`Traversal::reset`] or by
/// dropping the value. Graph edits made after construction are not seen
/// until the next reset.
#[derive(Debug, Clone)]
pub struct Traversal {
    algorithm: Algorithm,
    start: Option<NodeId>,
    adjacency: Adjacency,
    visited: BTreeSet<NodeId>,
    frontier: VecDeque<NodeId>,
    parents: BTreeMap<NodeId, Option<NodeId>>,
    order: Vec<NodeId>,
    current: Option<NodeId>,
    explored: BTreeSet<EdgeKey>,
}

impl Traversal {
    /// Bind a traversal to the graph's current adjacency.
    ///
    /// A start that is absent from the graph (or `None`) yields a traversal
    /// that is exhausted from the outset.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphwalk_core::{Algorithm, Graph, Position, Traversal};
    ///
    /// let mut graph = Graph::new();
    /// let a = graph.add_node(Position::new(0.0, 0.0));
    /// let b = graph.add_node(Position::new(50.0, 0.0));
    /// graph.add_edge(a, b);
    ///
    /// let mut traversal = Traversal::new(&graph, Algorithm::Bfs, a);
    /// while traversal.step() {}
    /// assert_eq!(traversal.order(), &[a, b]);
    /// ```
    #[must_use]
    pub fn new(graph: &Graph, algorithm: Algorithm, start: impl Into<Option<NodeId>>) -> Self {
        Self::from_adjacency(graph.adjacency(), algorithm, start)
    }

    /// Bind a traversal to an explicit adjacency snapshot.
    #[must_use]
    pub fn from_adjacency(
        adjacency: Adjacency,
        algorithm: Algorithm,
        start: impl Into<Option<NodeId>>,
    ) -> Self {
        let mut traversal = Self {
            algorithm,
            start: start.into(),
            adjacency,
            visited: BTreeSet::new(),
            frontier: VecDeque::new(),
            parents: BTreeMap::new(),
            order: Vec::new(),
            current: None,
            explored: BTreeSet::new(),
        };
        traversal.seed();
        traversal
    }

    /// Take a fresh snapshot of `graph` and return to the seeded state.
    pub fn reset(&mut self, graph: &Graph) {
        self.adjacency = graph.adjacency();
        self.seed();
    }

    fn seed(&mut self) {
        self.visited.clear();
        self.frontier.clear();
        self.parents.clear();
        self.order.clear();
        self.current = None;
        self.explored.clear();

        match self.start {
            Some(start) if self.adjacency.contains(start) => {
                self.frontier.push_back(start);
                self.parents.insert(start, None);
            }
            _ => {}
        }

        debug!(
            algorithm = %self.algorithm,
            start = ?self.start,
            nodes = self.adjacency.node_count(),
            edges = self.adjacency.edge_count(),
            "traversal seeded"
        );
    }

    /// Advance by one frontier removal.
    ///
    /// Returns `false` without touching any state once the frontier is
    /// empty; otherwise `true`.
    pub fn step(&mut self) -> bool {
        let popped = match self.algorithm {
            Algorithm::Bfs => self.frontier.pop_front(),
            Algorithm::Dfs => self.frontier.pop_back(),
        };
        let Some(u) = popped else {
            return false;
        };
        self.current = Some(u);

        if !self.visited.insert(u) {
            trace!(node = %u, "duplicate frontier entry spent");
            return true;
        }
        self.order.push(u);

        let mut discovered = Vec::new();
        for v in self.adjacency.neighbors_sorted(u) {
            self.explored.insert(EdgeKey::new(u, v));
            if self.visited.contains(&v) || self.frontier.contains(&v) || discovered.contains(&v) {
                continue;
            }
            self.parents.entry(v).or_insert(Some(u));
            discovered.push(v);
        }

        match self.algorithm {
            Algorithm::Bfs => self.frontier.extend(discovered),
            Algorithm::Dfs => self.frontier.extend(discovered.into_iter().rev()),
        }

        trace!(
            node = %u,
            frontier = self.frontier.len(),
            visited = self.visited.len(),
            "traversal step"
        );
        true
    }

    /// Step until exhausted, returning the number of steps taken.
    pub fn run_to_end(&mut self) -> usize {
        std::iter::from_fn(|| self.step().then_some(())).count()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.frontier.is_empty()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn start(&self) -> Option<NodeId> {
        self.start
    }

    #[must_use]
    pub const fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Pending nodes, front first.
    #[must_use]
    pub const fn frontier(&self) -> &VecDeque<NodeId> {
        &self.frontier
    }

    #[must_use]
    pub const fn visited(&self) -> &BTreeSet<NodeId> {
        &self.visited
    }

    /// Nodes in the order they were visited.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// First discoverer of each node; the start maps to `None`.
    #[must_use]
    pub const fn parents(&self) -> &BTreeMap<NodeId, Option<NodeId>> {
        &self.parents
    }

    #[must_use]
    pub const fn explored(&self) -> &BTreeSet<EdgeKey> {
        &self.explored
    }

    /// The snapshot this run is bound to.
    #[must_use]
    pub const fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Discovering node of `id`; `None` for the root and for undiscovered ids.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied().flatten()
    }

    /// `(child, parent)` pairs of the discovered tree, by child id.
    pub fn tree_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.parents
            .iter()
            .filter_map(|(&child, &parent)| parent.map(|parent| (child, parent)))
    }

    /// Whether the edge between `a` and `b` has been examined, in either
    /// orientation.
    #[must_use]
    pub fn is_explored(&self, a: NodeId, b: NodeId) -> bool {
        self.explored.contains(&EdgeKey::new(a, b))
    }

    #[must_use]
    pub fn node_status(&self, id: NodeId) -> NodeStatus {
        if self.current == Some(id) {
            NodeStatus::Current
        } else if self.visited.contains(&id) {
            NodeStatus::Visited
        } else if self.frontier.contains(&id) {
            NodeStatus::Frontier
        } else {
            NodeStatus::Unvisited
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> TraversalSnapshot {
        TraversalSnapshot {
            algorithm: self.algorithm,
            start: self.start,
            frontier: self.frontier.iter().copied().collect(),
            visited: self.visited.iter().copied().collect(),
            order: self.order.clone(),
            parents: self.parents.iter().map(|(&k, &v)| (k, v)).collect(),
            explored: self.explored.iter().copied().collect(),
            current: self.current,
            exhausted: self.is_exhausted(),
        }
    }
}
