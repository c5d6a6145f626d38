#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # graphwalk
//!
//! Interactive stepping of breadth-first and depth-first traversals over an
//! editable undirected graph.
//!
//! The graph model and the traversal engine live in [`graphwalk_core`];
//! this crate adds configuration, the editing [`session::Session`], text
//! rendering and the drivers behind the `graphwalk` binary.

pub use graphwalk_core;

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod panel;
pub mod sample;
pub mod session;

pub use config::{SampleConfig, WalkConfig};
pub use error::{Error, Result};
pub use session::{Deleted, Panels, Session};
