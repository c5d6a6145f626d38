//! Traversal behaviour on small hand-built graphs.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use graphwalk_core::{Algorithm, Graph, NodeId, NodeStatus, Position, Traversal};

fn n(raw: u64) -> NodeId {
    NodeId::new(raw)
}

fn graph(count: u64, edges: &[(u64, u64)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..count {
        graph.add_node(Position::new(i as f64 * 50.0, 0.0));
    }
    for &(a, b) in edges {
        graph.add_edge(n(a), n(b));
    }
    graph
}

#[test]
fn given_small_tree_when_bfs_from_root_then_level_order() {
    // GIVEN: 0-1, 0-2, 1-3
    let graph = graph(4, &[(0, 1), (0, 2), (1, 3)]);

    // WHEN: Breadth-first from 0 to exhaustion
    let mut traversal = Traversal::new(&graph, Algorithm::Bfs, n(0));
    traversal.run_to_end();

    // THEN: Level order with first-discoverer parents
    assert_eq!(traversal.order(), &[n(0), n(1), n(2), n(3)]);
    assert_eq!(
        traversal.tree_edges().collect::<Vec<_>>(),
        vec![(n(1), n(0)), (n(2), n(0)), (n(3), n(1))]
    );
}

#[test]
fn given_small_tree_when_dfs_from_root_then_deepest_branch_first() {
    let graph = graph(4, &[(0, 1), (0, 2), (1, 3)]);

    let mut traversal = Traversal::new(&graph, Algorithm::Dfs, n(0));
    traversal.run_to_end();

    assert_eq!(traversal.order(), &[n(0), n(1), n(3), n(2)]);
    // 2 is popped last but (0,2) was explored first, so 0 stays its parent
    assert_eq!(traversal.parent_of(n(2)), Some(n(0)));
    assert_eq!(traversal.parent_of(n(3)), Some(n(1)));
    assert_eq!(traversal.parent_of(n(1)), Some(n(0)));
}

#[test]
fn given_two_components_when_traversing_then_other_component_untouched() {
    // GIVEN: {0,1,2} and {3,4}
    let graph = graph(5, &[(0, 1), (1, 2), (3, 4)]);

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let mut traversal = Traversal::new(&graph, algorithm, n(3));
        traversal.run_to_end();

        assert_eq!(traversal.order().len(), 2, "{algorithm}");
        assert!(!traversal.visited().contains(&n(0)));
        assert_eq!(traversal.node_status(n(1)), NodeStatus::Unvisited);
    }
}

#[test]
fn given_cycle_when_stepping_then_frontier_never_holds_duplicates() {
    // GIVEN: A 4-cycle with a chord
    let graph = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let mut traversal = Traversal::new(&graph, algorithm, n(0));
        while traversal.step() {
            let frontier: Vec<_> = traversal.frontier().iter().collect();
            let mut unique = frontier.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(frontier.len(), unique.len(), "{algorithm}");
        }
        assert_eq!(traversal.explored().len(), 5);
    }
}

#[test]
fn given_same_input_when_run_twice_then_snapshots_serialise_identically() {
    let graph = graph(6, &[(0, 5), (5, 1), (1, 4), (4, 2), (2, 0), (3, 5)]);

    let run = |algorithm| {
        let mut traversal = Traversal::new(&graph, algorithm, n(0));
        traversal.run_to_end();
        serde_json::to_string(&traversal.snapshot()).unwrap()
    };

    assert_eq!(run(Algorithm::Bfs), run(Algorithm::Bfs));
    assert_eq!(run(Algorithm::Dfs), run(Algorithm::Dfs));
}

#[test]
fn given_bfs_mid_run_when_observing_then_frontier_is_fifo() {
    let graph = graph(5, &[(0, 3), (0, 1), (1, 4), (3, 2)]);
    let mut traversal = Traversal::new(&graph, Algorithm::Bfs, n(0));

    assert!(traversal.step());
    assert_eq!(traversal.frontier().iter().copied().collect::<Vec<_>>(), vec![n(1), n(3)]);

    assert!(traversal.step());
    assert_eq!(traversal.current(), Some(n(1)));
    assert_eq!(traversal.frontier().iter().copied().collect::<Vec<_>>(), vec![n(3), n(4)]);
}

#[test]
fn given_graph_edited_mid_run_when_stepping_then_snapshot_governs() {
    let mut graph = graph(3, &[(0, 1), (1, 2)]);
    let mut traversal = Traversal::new(&graph, Algorithm::Bfs, n(0));
    assert!(traversal.step());

    // WHEN: Node 2 is deleted after the traversal was bound
    graph.remove_node(n(2));
    traversal.run_to_end();

    // THEN: The bound snapshot still reaches it
    assert_eq!(traversal.order(), &[n(0), n(1), n(2)]);
}
