//! Point-in-time undirected adjacency.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use super::node::NodeId;

/// Value snapshot of the neighbour relation.
///
/// Built by [`Graph::adjacency`](super::Graph::adjacency); later edits to the
/// graph never reach an existing snapshot.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    inner: UnGraphMap<NodeId, ()>,
}

impl Adjacency {
    /// Builds a snapshot from a node list and edge pairs.
    ///
    /// Pairs naming a node outside `nodes` and self-pairs are skipped, so the
    /// snapshot only ever holds edges whose endpoints both exist.
    pub fn from_parts<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = NodeId>,
        E: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut inner = UnGraphMap::new();
        for id in nodes {
            inner.add_node(id);
        }
        for (a, b) in edges {
            if a != b && inner.contains_node(a) && inner.contains_node(b) {
                inner.add_edge(a, b, ());
            }
        }
        Self { inner }
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.inner.contains_node(id)
    }

    /// Neighbours of `id` in ascending id order; empty for an absent id.
    #[must_use]
    pub fn neighbors_sorted(&self, id: NodeId) -> Vec<NodeId> {
        if !self.inner.contains_node(id) {
            return Vec::new();
        }
        self.inner.neighbors(id).sorted().dedup().collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Ordered map of every node to its neighbour set.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<NodeId, BTreeSet<NodeId>> {
        self.inner
            .nodes()
            .map(|id| (id, self.inner.neighbors(id).collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_neighbors_sorted_numerically() {
        let adj = Adjacency::from_parts(
            ids(&[0, 2, 10, 3]),
            vec![
                (NodeId::new(0), NodeId::new(10)),
                (NodeId::new(3), NodeId::new(0)),
                (NodeId::new(0), NodeId::new(2)),
            ],
        );
        assert_eq!(adj.neighbors_sorted(NodeId::new(0)), ids(&[2, 3, 10]));
        assert_eq!(adj.neighbors_sorted(NodeId::new(10)), ids(&[0]));
    }

    #[test]
    fn test_skips_edges_with_missing_endpoint_and_self_pairs() {
        let adj = Adjacency::from_parts(
            ids(&[0, 1]),
            vec![
                (NodeId::new(0), NodeId::new(1)),
                (NodeId::new(1), NodeId::new(5)),
                (NodeId::new(1), NodeId::new(1)),
            ],
        );
        assert_eq!(adj.edge_count(), 1);
        assert!(!adj.contains(NodeId::new(5)));
    }

    #[test]
    fn test_isolated_nodes_are_present() {
        let adj = Adjacency::from_parts(ids(&[4]), Vec::new());
        assert!(adj.contains(NodeId::new(4)));
        assert!(adj.neighbors_sorted(NodeId::new(4)).is_empty());
        assert!(adj.neighbors_sorted(NodeId::new(9)).is_empty());
    }

    #[test]
    fn test_to_map_is_symmetric() {
        let adj = Adjacency::from_parts(ids(&[0, 1, 2]), vec![(NodeId::new(0), NodeId::new(1))]);
        let map = adj.to_map();

        assert_eq!(map.get(&NodeId::new(0)), Some(&BTreeSet::from([NodeId::new(1)])));
        assert_eq!(map.get(&NodeId::new(1)), Some(&BTreeSet::from([NodeId::new(0)])));
        assert_eq!(map.get(&NodeId::new(2)), Some(&BTreeSet::new()));
    }
}
