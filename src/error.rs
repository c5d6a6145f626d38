//! Error types for user input reaching graphwalk.
//!
//! The core never fails; everything here is about rejecting malformed input
//! before it is handed to the core.

use std::path::PathBuf;

use thiserror::Error;

use graphwalk_core::{NodeId, ParseAlgorithmError};

/// Error type for graphwalk sessions and configuration.
#[derive(Debug, Error)]
pub enum Error {
    // Input validation
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("invalid node id '{input}'")]
    InvalidNodeId { input: String },

    #[error("invalid edge '{input}': {reason}")]
    InvalidEdge { input: String, reason: String },

    #[error("coordinates must be finite, got ({x}, {y})")]
    NonFiniteCoordinates { x: f64, y: f64 },

    #[error("invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    #[error("invalid sample: {reason}")]
    InvalidSample { reason: String },

    #[error("graph of {requested} nodes exceeds the limit of {limit}")]
    TooManyNodes { requested: u64, limit: usize },

    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),

    // Configuration
    #[error("failed to read config '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("failed to parse config '{path}': {reason}")]
    ConfigParseFailed { path: PathBuf, reason: String },

    // Generic I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid edge error.
    pub fn invalid_edge(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEdge {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid command error.
    pub fn invalid_command(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid sample error.
    pub fn invalid_sample(reason: impl Into<String>) -> Self {
        Self::InvalidSample {
            reason: reason.into(),
        }
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, Error>;
