//! # graphwalk
//!
//! Entry point: load configuration, build the initial graph, then hand the
//! session to the unattended player (`run`) or the interactive prompt
//! (`repl`).

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use graphwalk::cli::{Cli, Commands, GraphArgs, WalkArgs};
use graphwalk::driver::{self, GraphSource, Output};
use graphwalk::graphwalk_core::NodeId;
use graphwalk::input::parse_edge_list;
use graphwalk::{Session, WalkConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Run {
            graph,
            walk,
            start,
            json,
        } => {
            let mut session = build_session(config, &graph, &walk)?;
            if let Some(start) = start {
                session
                    .select_start(NodeId::new(start))
                    .with_context(|| format!("Cannot start the traversal at node {start}"))?;
            }
            let steps = driver::run(session, output(json)).await?;
            debug!(steps, "run finished");
        }
        Commands::Repl { graph, walk, json } => {
            let session = build_session(config, &graph, &walk)?;
            driver::repl(session, output(json))
                .await
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}

/// Logs go to stderr so frames on stdout stay machine-readable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<WalkConfig> {
    let config = match &cli.config {
        Some(path) => WalkConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
            .with_env(),
        None => WalkConfig::from_env(),
    };
    info!(
        algorithm = %config.algorithm,
        delay_ms = config.step_delay.as_millis(),
        "configuration loaded"
    );
    Ok(config)
}

fn build_session(mut config: WalkConfig, graph: &GraphArgs, walk: &WalkArgs) -> Result<Session> {
    if let Some(algorithm) = walk.algo {
        config = config.algorithm(algorithm);
    }
    if let Some(ms) = walk.delay_ms {
        config = config.step_delay(Duration::from_millis(ms));
    }
    if let Some(nodes) = graph.sample {
        config.sample.nodes = nodes;
    }
    if let Some(density) = graph.density {
        config.sample.density = density;
    }
    if graph.seed.is_some() {
        config.sample.seed = graph.seed;
    }

    let source = if graph.is_explicit() {
        let edges = match &graph.edges {
            Some(list) => parse_edge_list(list).context("Invalid --edges")?,
            None => Vec::new(),
        };
        GraphSource::Explicit {
            nodes: graph.nodes.unwrap_or(0),
            edges,
        }
    } else {
        GraphSource::Sample
    };

    let built = driver::build_graph(&source, &config).context("Failed to build the graph")?;
    info!(
        nodes = built.node_count(),
        edges = built.edge_count(),
        "graph ready"
    );
    Ok(Session::with_graph(config, built))
}

const fn output(json: bool) -> Output {
    if json { Output::Json } else { Output::Text }
}
