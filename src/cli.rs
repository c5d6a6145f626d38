//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use graphwalk_core::Algorithm;

/// graphwalk - step through BFS and DFS on an undirected graph
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(version)]
#[command(about = "Step through breadth-first and depth-first traversals of an undirected graph")]
#[command(
    long_about = "graphwalk builds an undirected graph from an edge list or a random sample and plays a BFS or DFS traversal over it one step at a time, showing the frontier, the visitation order and which edges have been explored."
)]
pub struct Cli {
    /// Config file (TOML, or JSON by extension)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a traversal to the end, printing every step
    Run {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        walk: WalkArgs,

        /// Start node (defaults to the lowest id)
        #[arg(short, long)]
        start: Option<u64>,

        /// Print JSON snapshots instead of text frames
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Edit the graph and drive the traversal interactively
    Repl {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        walk: WalkArgs,

        /// Print JSON snapshots on automatic steps
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Where the initial graph comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Number of nodes, ids 0..N
    #[arg(short, long)]
    pub nodes: Option<u64>,

    /// Edge list, e.g. "0-1,0-2,1-3"
    #[arg(short, long)]
    pub edges: Option<String>,

    /// Generate a random graph with this many nodes
    #[arg(long, conflicts_with_all = ["nodes", "edges"])]
    pub sample: Option<usize>,

    /// Edge probability for sampled graphs
    #[arg(long)]
    pub density: Option<f64>,

    /// Seed for sampled graphs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GraphArgs {
    /// True when the graph is given explicitly rather than sampled.
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        self.nodes.is_some() || self.edges.is_some()
    }
}

/// Traversal and pacing overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Traversal algorithm (bfs or dfs)
    #[arg(short, long)]
    pub algo: Option<Algorithm>,

    /// Milliseconds between automatic steps
    #[arg(short, long)]
    pub delay_ms: Option<u64>,
}
