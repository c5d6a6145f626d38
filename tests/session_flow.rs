//! Integration tests driving a session through interactive commands.
//!
//! These tests verify that:
//! - Graphs built from commands traverse in the documented order
//! - Edits during a run only take effect after a restart
//! - Rejected commands leave the session untouched

#![forbid(clippy::unwrap_used)]
#![forbid(clippy::expect_used)]
#![forbid(clippy::panic)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use graphwalk::driver::{Reply, apply};
use graphwalk::graphwalk_core::{Algorithm, NodeId};
use graphwalk::input::Command;
use graphwalk::{Error, Session, WalkConfig};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn send(session: &mut Session, rng: &mut StdRng, line: &str) -> Result<Reply, Error> {
    match Command::parse(line)? {
        Some(command) => apply(session, command, rng),
        None => Ok(Reply::Silent),
    }
}

/// Four nodes on a square: 0-1, 0-2, 1-3.
fn square(session: &mut Session, rng: &mut StdRng) -> TestResult {
    for line in [
        "add 0 0",
        "add 100 0",
        "add 0 100",
        "add 100 100",
        "connect 0 1",
        "connect 0 2",
        "connect 1 3",
    ] {
        send(session, rng, line)?;
    }
    Ok(())
}

fn run_out(session: &mut Session, rng: &mut StdRng) -> TestResult {
    while matches!(send(session, rng, "step")?, Reply::Text(ref t) if t != "traversal exhausted") {}
    Ok(())
}

/// # GIVEN
/// A square graph built from commands
///
/// # WHEN
/// BFS is stepped to the end
///
/// # THEN
/// Nodes are visited level by level
#[test]
fn test_bfs_from_commands() -> TestResult {
    // GIVEN
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(WalkConfig::default());
    square(&mut session, &mut rng)?;

    // WHEN
    run_out(&mut session, &mut rng)?;

    // THEN
    assert_eq!(session.panels().visited_log, "0 → 1 → 2 → 3");
    assert!(session.panels().frontier.is_empty());
    assert_eq!(session.panels().frontier_label, "Queue (BFS)");
    Ok(())
}

/// # GIVEN
/// The same square graph with DFS selected
///
/// # WHEN
/// DFS is stepped to the end
///
/// # THEN
/// The lowest neighbour's branch is finished before its sibling
#[test]
fn test_dfs_from_commands() -> TestResult {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(WalkConfig::default());
    square(&mut session, &mut rng)?;

    let reply = send(&mut session, &mut rng, "algo dfs")?;
    assert_eq!(reply, Reply::Text("algorithm: dfs".to_string()));
    run_out(&mut session, &mut rng)?;

    assert_eq!(session.algorithm(), Algorithm::Dfs);
    assert_eq!(session.panels().visited_log, "0 → 1 → 3 → 2");
    assert_eq!(session.panels().frontier_label, "Stack (DFS)");
    Ok(())
}

/// # GIVEN
/// A traversal that has taken one step
///
/// # WHEN
/// A new edge is added and the traversal continues
///
/// # THEN
/// The edge is ignored until the traversal is restarted
#[test]
fn test_edits_apply_after_restart() -> TestResult {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(WalkConfig::default());
    for line in ["add 0 0", "add 100 0", "add 200 0", "connect 0 1"] {
        send(&mut session, &mut rng, line)?;
    }

    send(&mut session, &mut rng, "step")?;
    send(&mut session, &mut rng, "connect 1 2")?;
    run_out(&mut session, &mut rng)?;
    assert_eq!(session.panels().visited_log, "0 → 1");

    send(&mut session, &mut rng, "restart")?;
    run_out(&mut session, &mut rng)?;
    assert_eq!(session.panels().visited_log, "0 → 1 → 2");
    Ok(())
}

/// # GIVEN
/// A session whose start node is 0
///
/// # WHEN
/// An unknown start is requested, then node 0 is deleted by position
///
/// # THEN
/// The bad request is rejected and the start falls back to the next node
#[test]
fn test_start_selection_and_fallback() -> TestResult {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(WalkConfig::default());
    square(&mut session, &mut rng)?;

    let rejected = send(&mut session, &mut rng, "start 42");
    assert!(matches!(rejected, Err(Error::UnknownNode(id)) if id == NodeId::new(42)));
    assert_eq!(session.start(), Some(NodeId::new(0)));

    let reply = send(&mut session, &mut rng, "delete 2 1")?;
    assert_eq!(reply, Reply::Text("deleted node 0".to_string()));
    assert_eq!(session.start(), Some(NodeId::new(1)));
    assert_eq!(session.graph().edge_count(), 1);
    Ok(())
}

/// # GIVEN
/// A session with a seeded sample loaded
///
/// # WHEN
/// The same seeded sample is loaded again
///
/// # THEN
/// Both graphs have identical edges
#[test]
fn test_seeded_sample_command_is_reproducible() -> TestResult {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(WalkConfig::default());

    send(&mut session, &mut rng, "sample 7")?;
    let first: Vec<_> = session.graph().edges().to_vec();
    send(&mut session, &mut rng, "sample 7")?;

    assert_eq!(session.graph().edges(), first.as_slice());
    assert_eq!(session.graph().node_count(), session.config().sample.nodes);
    Ok(())
}

#[test]
fn test_quit_and_blank_lines() -> TestResult {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(WalkConfig::default());

    assert_eq!(send(&mut session, &mut rng, "   ")?, Reply::Silent);
    assert_eq!(send(&mut session, &mut rng, "quit")?, Reply::Quit);
    Ok(())
}
