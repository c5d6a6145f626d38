//! Application state for one interactive graphwalk session.
//!
//! A [`Session`] owns the graph being edited, the traversal being watched
//! and the playback controls around it. It is the single owner of all
//! mutable state; there are no globals. Both drivers (the playback timer
//! through [`Session::tick`] and the user through [`Session::step_once`])
//! go through `&mut Session`, so only one of them can step at a time.

use std::time::{Duration, Instant};

use itertools::Itertools;
use rand::Rng;
use tracing::{debug, info, warn};

use graphwalk_core::{
    Algorithm, EdgeId, Graph, GraphSubscription, NodeId, NodeStatus, Position, Traversal,
    TraversalSnapshot,
};

use crate::config::WalkConfig;
use crate::error::{Error, Result};
use crate::sample::sample_graph;

/// What a delete gesture removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deleted {
    Node(NodeId),
    Edge(EdgeId),
}

/// Panel contents beside the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    pub frontier_label: &'static str,
    /// Front first; for a stack the rightmost chip is the top.
    pub frontier: Vec<NodeId>,
    /// Visitation order joined with arrows.
    pub visited_log: String,
}

/// Graph, traversal and playback state owned by the presentation layer.
#[derive(Debug)]
pub struct Session {
    config: WalkConfig,
    graph: Graph,
    subscription: GraphSubscription,
    traversal: Option<Traversal>,
    playing: bool,
    algorithm: Algorithm,
    start: Option<NodeId>,
    step_delay: Duration,
    last_step_at: Option<Instant>,
    last_snapshot: TraversalSnapshot,
}

impl Session {
    /// Create a session with an empty graph.
    #[must_use]
    pub fn new(config: WalkConfig) -> Self {
        Self::with_graph(config, Graph::new())
    }

    /// Create a session around an existing graph.
    #[must_use]
    pub fn with_graph(config: WalkConfig, graph: Graph) -> Self {
        let subscription = graph.subscribe();
        let algorithm = config.algorithm;
        let step_delay = config.clamp_delay(config.step_delay);
        let mut session = Self {
            config,
            graph,
            subscription,
            traversal: None,
            playing: false,
            algorithm,
            start: None,
            step_delay,
            last_step_at: None,
            last_snapshot: TraversalSnapshot::empty(algorithm),
        };
        session.refresh_start();
        session
    }

    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub const fn config(&self) -> &WalkConfig {
        &self.config
    }

    #[must_use]
    pub const fn traversal(&self) -> Option<&Traversal> {
        self.traversal.as_ref()
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Currently selected start vertex.
    #[must_use]
    pub const fn start(&self) -> Option<NodeId> {
        self.start
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn step_delay(&self) -> Duration {
        self.step_delay
    }

    // ------------------------------------------------------------------
    // Start-vertex choices
    // ------------------------------------------------------------------

    /// Selectable start vertices, in insertion order.
    #[must_use]
    pub fn start_choices(&self) -> Vec<NodeId> {
        self.graph.nodes().iter().map(|node| node.id()).collect()
    }

    /// Consume pending graph events and keep the start selection valid.
    fn sync_start(&mut self) {
        let lagged_before = self.subscription.lagged();
        let node_list_changed = self
            .subscription
            .drain()
            .iter()
            .any(|event| event.changes_node_list());
        if node_list_changed || self.subscription.lagged() != lagged_before {
            self.refresh_start();
        }
    }

    /// Keep the current choice if it still exists, else fall back to the
    /// first node.
    fn refresh_start(&mut self) {
        let keep = self
            .start
            .filter(|&current| self.graph.contains_node(current));
        let next = keep.or_else(|| self.graph.nodes().first().map(|node| node.id()));
        if next != self.start {
            debug!(from = ?self.start, to = ?next, "start vertex changed");
        }
        self.start = next;
    }

    /// Choose the start vertex. Discards the current traversal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is not in the graph.
    pub fn select_start(&mut self, id: NodeId) -> Result<()> {
        if !self.graph.contains_node(id) {
            warn!(node = %id, "rejected unknown start vertex");
            return Err(Error::UnknownNode(id));
        }
        self.start = Some(id);
        self.reset();
        Ok(())
    }

    /// Choose the algorithm. Discards the current traversal.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.reset();
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Place a node.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is not finite.
    pub fn add_node(&mut self, position: Position) -> Result<NodeId> {
        ensure_finite(position)?;
        let id = self.graph.add_node(position);
        self.sync_start();
        Ok(id)
    }

    /// Place a node at `point` unless an existing node is already there.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is not finite.
    pub fn add_node_at(&mut self, point: Position) -> Result<Option<NodeId>> {
        ensure_finite(point)?;
        if self.node_at(point).is_some() {
            return Ok(None);
        }
        self.add_node(point).map(Some)
    }

    /// Connect two nodes. Joining a node to itself or repeating an existing
    /// edge does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either endpoint is absent.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<Option<EdgeId>> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        let edge = self.graph.add_edge(a, b);
        self.sync_start();
        Ok(edge)
    }

    /// Remove a node and its edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is absent.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        self.ensure_node(id)?;
        self.graph.remove_node(id);
        self.sync_start();
        Ok(())
    }

    /// Move a node.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is absent or the position is not finite.
    pub fn move_node(&mut self, id: NodeId, position: Position) -> Result<()> {
        ensure_finite(position)?;
        self.ensure_node(id)?;
        self.graph.move_node(id, position);
        self.sync_start();
        Ok(())
    }

    /// Delete whatever is under `point`: a node first, otherwise an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is not finite.
    pub fn delete_at(&mut self, point: Position) -> Result<Option<Deleted>> {
        ensure_finite(point)?;
        let deleted = if let Some(id) = self.node_at(point) {
            self.graph.remove_node(id);
            Some(Deleted::Node(id))
        } else if let Some(id) = self.edge_at(point) {
            self.graph.remove_edge(id);
            Some(Deleted::Edge(id))
        } else {
            None
        };
        self.sync_start();
        Ok(deleted)
    }

    fn node_at(&self, point: Position) -> Option<NodeId> {
        self.graph
            .find_node_near(point, self.config.node_pick_tolerance)
            .map(|node| node.id())
    }

    fn edge_at(&self, point: Position) -> Option<EdgeId> {
        self.graph
            .edge_near(point, self.config.edge_pick_tolerance)
            .map(|edge| edge.id())
    }

    fn ensure_node(&self, id: NodeId) -> Result<()> {
        if self.graph.contains_node(id) {
            Ok(())
        } else {
            Err(Error::UnknownNode(id))
        }
    }

    /// Replace the graph wholesale and drop the traversal.
    fn replace_graph(&mut self, graph: Graph) {
        self.subscription = graph.subscribe();
        self.graph = graph;
        self.traversal = None;
        self.playing = false;
        self.last_snapshot = TraversalSnapshot::empty(self.algorithm);
        self.refresh_start();
    }

    /// Empty the canvas.
    pub fn clear(&mut self) {
        self.replace_graph(Graph::new());
        info!("graph cleared");
    }

    /// Replace the graph with a random sample from the session's config.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample parameters are invalid.
    pub fn load_sample<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let graph = sample_graph(&self.config.sample, rng)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "sample graph loaded"
        );
        self.replace_graph(graph);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------

    fn ensure_traversal(&mut self) -> &mut Traversal {
        let traversal = self.traversal.get_or_insert_with(|| {
            info!(algorithm = %self.algorithm, start = ?self.start, "traversal started");
            Traversal::new(&self.graph, self.algorithm, self.start)
        });
        self.last_snapshot = traversal.snapshot();
        traversal
    }

    /// Start or resume automatic stepping.
    pub fn play(&mut self) {
        self.ensure_traversal();
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pause and advance exactly one step. Returns the engine's step result.
    pub fn step_once(&mut self) -> bool {
        self.playing = false;
        let stepped = self.ensure_traversal().step();
        self.record_step(Instant::now());
        stepped
    }

    /// Advance one step if playing and the step delay has elapsed since the
    /// previous one. Returns whether a step was taken.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        let due = self
            .last_step_at
            .is_none_or(|last| now.saturating_duration_since(last) >= self.step_delay);
        if !due {
            return false;
        }

        let progressed = self.ensure_traversal().step();
        self.record_step(now);
        if !progressed {
            self.playing = false;
            info!(
                visited = self.last_snapshot.order.len(),
                "traversal exhausted"
            );
        }
        progressed
    }

    fn record_step(&mut self, now: Instant) {
        self.last_step_at = Some(now);
        if let Some(traversal) = &self.traversal {
            self.last_snapshot = traversal.snapshot();
        }
    }

    /// Drop the traversal and stop playback. The panels keep showing the
    /// last state until something new starts.
    pub fn reset(&mut self) {
        if self.traversal.take().is_some() {
            debug!("traversal reset");
        }
        self.playing = false;
        self.last_step_at = None;
    }

    /// Rebind the current traversal to the graph as it is now and return to
    /// the seeded state, keeping the algorithm and start it was built with.
    pub fn restart(&mut self) {
        if let Some(traversal) = &mut self.traversal {
            traversal.reset(&self.graph);
            self.last_snapshot = traversal.snapshot();
            debug!("traversal restarted");
        }
        self.playing = false;
        self.last_step_at = None;
    }

    /// Set the automatic step delay, clamped to the configured bounds.
    pub fn set_step_delay(&mut self, delay: Duration) -> Duration {
        self.step_delay = self.config.clamp_delay(delay);
        self.step_delay
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Observables of the live traversal, or the last ones seen.
    #[must_use]
    pub fn snapshot(&self) -> TraversalSnapshot {
        self.traversal
            .as_ref()
            .map_or_else(|| self.last_snapshot.clone(), Traversal::snapshot)
    }

    #[must_use]
    pub fn panels(&self) -> Panels {
        let snapshot = self.snapshot();
        Panels {
            frontier_label: self.algorithm.frontier_label(),
            frontier: snapshot.frontier,
            visited_log: snapshot.order.iter().join(" → "),
        }
    }

    /// Tooltip text for a node, e.g. `Node 3 • Visited • Parent: 1`.
    #[must_use]
    pub fn describe_node(&self, id: NodeId) -> Option<String> {
        if !self.graph.contains_node(id) {
            return None;
        }
        let mut lines = vec![format!("Node {id}")];
        if let Some(traversal) = &self.traversal {
            let status = match traversal.node_status(id) {
                NodeStatus::Current => NodeStatus::Visited,
                status => status,
            };
            lines.push(status.label().to_string());
            if let Some(parent) = traversal.parent_of(id) {
                lines.push(format!("Parent: {parent}"));
            }
        }
        Some(lines.join(" • "))
    }

    /// Tooltip text for whatever node is under `point`.
    #[must_use]
    pub fn describe_at(&self, point: Position) -> Option<String> {
        self.node_at(point).and_then(|id| self.describe_node(id))
    }
}

fn ensure_finite(position: Position) -> Result<()> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteCoordinates {
            x: position.x,
            y: position.y,
        })
    }
}
