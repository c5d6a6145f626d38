//! Drivers that step a session: an unattended player and an interactive
//! prompt. Both pace automatic steps with a `tokio` interval.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{info, warn};

use graphwalk_core::{Graph, NodeId, Position};

use crate::config::{SampleConfig, WalkConfig};
use crate::error::{Error, Result};
use crate::input::{Command, HELP};
use crate::panel::render_frame;
use crate::sample::sample_graph;
use crate::session::{Deleted, Session};

/// How frames are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Text,
    Json,
}

/// Where the initial graph comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    /// `nodes` nodes laid out on a circle, joined by `edges`.
    Explicit {
        nodes: u64,
        edges: Vec<(NodeId, NodeId)>,
    },
    Sample,
}

/// Build the initial graph.
///
/// Explicit graphs get enough nodes to cover every id named by an edge,
/// placed evenly on a circle inside the sample canvas.
///
/// # Errors
///
/// Returns an error if the graph would exceed `max_nodes` or the canvas
/// parameters are invalid.
pub fn build_graph(source: &GraphSource, config: &WalkConfig) -> Result<Graph> {
    match source {
        GraphSource::Explicit { nodes, edges } => {
            let needed = edges
                .iter()
                .map(|&(a, b)| a.get().max(b.get()).saturating_add(1))
                .max()
                .unwrap_or(0)
                .max(*nodes);
            config.sample.check_node_count(needed)?;
            let (span_x, span_y) = config.sample.padded_span()?;

            let mut graph = Graph::new();
            for position in circle_layout(needed, &config.sample, span_x.min(span_y) / 2.0) {
                graph.add_node(position);
            }
            for &(a, b) in edges {
                graph.add_edge(a, b);
            }
            Ok(graph)
        }
        GraphSource::Sample => sample_graph(&config.sample, &mut sample_rng(config.sample.seed)),
    }
}

fn sample_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Evenly spaced positions on a circle of `radius` about the canvas centre.
fn circle_layout(count: u64, canvas: &SampleConfig, radius: f64) -> Vec<Position> {
    let cx = canvas.width / 2.0;
    let cy = canvas.height / 2.0;
    #[allow(clippy::cast_precision_loss)]
    let total = count.max(1) as f64;

    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = std::f64::consts::TAU * (i as f64) / total;
            Position::new(radius.mul_add(angle.cos(), cx), radius.mul_add(angle.sin(), cy))
        })
        .collect()
}

fn frame(session: &Session, output: Output) -> String {
    match output {
        Output::Text => render_frame(session),
        Output::Json => serde_json::to_string(&session.snapshot())
            .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}")),
    }
}

fn pacing(delay: Duration) -> Interval {
    let mut interval = tokio::time::interval(delay);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Play the session's traversal to exhaustion, printing a frame per step.
///
/// Returns the number of productive steps.
///
/// # Errors
///
/// Currently infallible once the session exists; kept fallible for parity
/// with [`repl`].
pub async fn run(mut session: Session, output: Output) -> Result<usize> {
    session.play();
    println!("{}", frame(&session, output));

    let mut interval = pacing(session.step_delay());
    let mut steps = 0usize;
    while session.is_playing() {
        let scheduled = interval.tick().await;
        if session.tick(scheduled.into_std()) {
            steps = steps.saturating_add(1);
            println!("{}", frame(&session, output));
        }
    }

    info!(steps, order = %session.panels().visited_log, "traversal complete");
    Ok(steps)
}

/// Outcome of one interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Quit,
    Silent,
    Text(String),
}

/// Apply one command to the session.
///
/// # Errors
///
/// Returns an error if the command names an unknown node or the sample
/// parameters are invalid; the session is left unchanged.
pub fn apply(session: &mut Session, command: Command, rng: &mut StdRng) -> Result<Reply> {
    let reply = match command {
        Command::Play => {
            session.play();
            Reply::Silent
        }
        Command::Pause => {
            session.pause();
            Reply::Silent
        }
        Command::Toggle => {
            session.toggle_play();
            Reply::Silent
        }
        Command::Step => {
            if session.step_once() {
                Reply::Text(render_frame(session))
            } else {
                Reply::Text("traversal exhausted".to_string())
            }
        }
        Command::Reset => {
            session.reset();
            Reply::Silent
        }
        Command::Restart => {
            session.restart();
            Reply::Text(render_frame(session))
        }
        Command::Clear => {
            session.clear();
            Reply::Silent
        }
        Command::Sample { seed } => {
            match seed {
                Some(seed) => session.load_sample(&mut StdRng::seed_from_u64(seed))?,
                None => session.load_sample(rng)?,
            }
            Reply::Text(render_frame(session))
        }
        Command::Algorithm(algorithm) => {
            session.select_algorithm(algorithm);
            Reply::Text(format!("algorithm: {algorithm}"))
        }
        Command::Start(id) => {
            session.select_start(id)?;
            Reply::Text(format!("start: {id}"))
        }
        Command::Add(position) => match session.add_node_at(position)? {
            Some(id) => Reply::Text(format!("added node {id}")),
            None => Reply::Text("a node is already there".to_string()),
        },
        Command::Connect(a, b) => match session.connect(a, b)? {
            Some(_) => Reply::Text(format!("connected {a}-{b}")),
            None => Reply::Text(format!("{a}-{b} not added")),
        },
        Command::Remove(id) => {
            session.remove_node(id)?;
            Reply::Text(format!("removed node {id}"))
        }
        Command::Delete(point) => match session.delete_at(point)? {
            Some(Deleted::Node(id)) => Reply::Text(format!("deleted node {id}")),
            Some(Deleted::Edge(id)) => Reply::Text(format!("deleted edge {id}")),
            None => Reply::Text("nothing there".to_string()),
        },
        Command::Move(id, position) => {
            session.move_node(id, position)?;
            Reply::Silent
        }
        Command::Pick(point) => Reply::Text(
            session
                .describe_at(point)
                .unwrap_or_else(|| "nothing there".to_string()),
        ),
        Command::Delay(delay) => {
            let applied = session.set_step_delay(delay);
            Reply::Text(format!("delay: {}ms", applied.as_millis()))
        }
        Command::Show => Reply::Text(render_frame(session)),
        Command::Json => Reply::Text(frame(session, Output::Json)),
        Command::Help => Reply::Text(HELP.to_string()),
        Command::Quit => Reply::Quit,
    };
    Ok(reply)
}

/// Interactive prompt: commands on stdin, automatic steps on a timer.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn repl(mut session: Session, output: Output) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rng = sample_rng(session.config().sample.seed);
    let mut interval = pacing(session.step_delay());

    println!("{HELP}");
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(Error::Io)? else {
                    break;
                };
                let reply = Command::parse(&line).and_then(|command| match command {
                    Some(command) => apply(&mut session, command, &mut rng),
                    None => Ok(Reply::Silent),
                });
                match reply {
                    Ok(Reply::Quit) => break,
                    Ok(Reply::Silent) => {}
                    Ok(Reply::Text(text)) => println!("{text}"),
                    Err(e) => {
                        warn!("rejected input: {e}");
                        println!("error: {e}");
                    }
                }
                if interval.period() != session.step_delay() {
                    interval = pacing(session.step_delay());
                }
            }
            scheduled = interval.tick(), if session.is_playing() => {
                if session.tick(scheduled.into_std()) {
                    println!("{}", frame(&session, output));
                } else if !session.is_playing() {
                    println!("traversal complete: {}", session.panels().visited_log);
                }
            }
        }
    }

    info!("session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_explicit_graph_covers_edge_ids() {
        let source = GraphSource::Explicit {
            nodes: 2,
            edges: vec![(NodeId::new(0), NodeId::new(4))],
        };
        let graph = build_graph(&source, &WalkConfig::default()).unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_explicit_graph_rejects_huge_ids() {
        let edges = crate::input::parse_edge_list("0-18446744073709551615").unwrap();
        let source = GraphSource::Explicit { nodes: 0, edges };
        let result = build_graph(&source, &WalkConfig::default());
        assert!(matches!(
            result,
            Err(Error::TooManyNodes {
                requested: u64::MAX,
                limit: 500
            })
        ));

        let source = GraphSource::Explicit {
            nodes: 501,
            edges: Vec::new(),
        };
        assert!(matches!(
            build_graph(&source, &WalkConfig::default()),
            Err(Error::TooManyNodes { .. })
        ));
    }

    #[test]
    fn test_circle_layout_stays_on_canvas() {
        let canvas = SampleConfig::default();
        for p in circle_layout(7, &canvas, 260.0) {
            assert!(p.x >= canvas.padding && p.x <= canvas.width - canvas.padding);
            assert!(p.y >= canvas.padding && p.y <= canvas.height - canvas.padding);
        }
    }

    #[test]
    fn test_seeded_sample_source_is_reproducible() {
        let mut config = WalkConfig::default();
        config.sample.seed = Some(11);
        let a = build_graph(&GraphSource::Sample, &config).unwrap();
        let b = build_graph(&GraphSource::Sample, &config).unwrap();
        assert_eq!(a.edges(), b.edges());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_plays_to_exhaustion() {
        let source = GraphSource::Explicit {
            nodes: 4,
            edges: vec![
                (NodeId::new(0), NodeId::new(1)),
                (NodeId::new(0), NodeId::new(2)),
                (NodeId::new(1), NodeId::new(3)),
            ],
        };
        let config = WalkConfig::default();
        let graph = build_graph(&source, &config).unwrap();
        let session = Session::with_graph(config, graph);

        let steps = run(session, Output::Json).await.unwrap();
        assert_eq!(steps, 4);
    }
}
