//! Orientation-free edge key for the explored set

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// Undirected edge key with its endpoints stored in ascending order, so
/// exploring `(u, v)` and later `(v, u)` produce the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    low: NodeId,
    high: NodeId,
}

impl EdgeKey {
    #[must_use]
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { low: u, high: v }
        } else {
            Self { low: v, high: u }
        }
    }

    #[must_use]
    pub const fn low(self) -> NodeId {
        self.low
    }

    #[must_use]
    pub const fn high(self) -> NodeId {
        self.high
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
