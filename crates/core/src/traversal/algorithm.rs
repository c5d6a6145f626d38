//! Search algorithm selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which end of the frontier a step removes from.
///
/// The two searches differ in nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// FIFO frontier.
    #[default]
    Bfs,
    /// LIFO frontier.
    Dfs,
}

impl Algorithm {
    /// Heading for the frontier panel.
    #[must_use]
    pub const fn frontier_label(self) -> &'static str {
        match self {
            Self::Bfs => "Queue (BFS)",
            Self::Dfs => "Stack (DFS)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => write!(f, "bfs"),
            Self::Dfs => write!(f, "dfs"),
        }
    }
}

/// Unrecognised algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal algorithm '{0}' (expected bfs or dfs)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth" => Ok(Self::Bfs),
            "dfs" | "depth-first" | "depth" => Ok(Self::Dfs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_tags_and_names() {
        assert_eq!("bfs".parse(), Ok(Algorithm::Bfs));
        assert_eq!(" DFS ".parse(), Ok(Algorithm::Dfs));
        assert_eq!("Breadth-First".parse(), Ok(Algorithm::Bfs));
        assert_eq!("depth-first".parse(), Ok(Algorithm::Dfs));
    }

    #[test]
    fn test_parse_rejects_other_algorithms() {
        let err = "dijkstra".parse::<Algorithm>();
        assert_eq!(err, Err(ParseAlgorithmError("dijkstra".to_string())));
        if let Err(err) = err {
            assert!(err.to_string().contains("expected bfs or dfs"));
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn test_frontier_labels() {
        assert_eq!(Algorithm::Bfs.frontier_label(), "Queue (BFS)");
        assert_eq!(Algorithm::Dfs.frontier_label(), "Stack (DFS)");
    }
}
