//! Parsing of user input: edge lists and interactive commands.

use std::time::Duration;

use graphwalk_core::{Algorithm, NodeId, Position};

use crate::error::{Error, Result};

/// Parse a node id such as `3`.
///
/// # Errors
///
/// Returns [`Error::InvalidNodeId`] for anything but an unsigned integer.
pub fn parse_node_id(input: &str) -> Result<NodeId> {
    input
        .trim()
        .parse::<u64>()
        .map(NodeId::new)
        .map_err(|_| Error::InvalidNodeId {
            input: input.to_string(),
        })
}

/// Parse an edge list such as `0-1, 0-2 1-3`.
///
/// Pairs are separated by commas or whitespace; each pair is two node ids
/// joined by `-`.
///
/// # Errors
///
/// Returns [`Error::InvalidEdge`] for a malformed pair or a self-loop.
pub fn parse_edge_list(input: &str) -> Result<Vec<(NodeId, NodeId)>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_edge)
        .collect()
}

fn parse_edge(token: &str) -> Result<(NodeId, NodeId)> {
    let (a, b) = token
        .split_once('-')
        .ok_or_else(|| Error::invalid_edge(token, "expected two ids joined by '-'"))?;
    let a = parse_node_id(a).map_err(|_| Error::invalid_edge(token, "bad first endpoint"))?;
    let b = parse_node_id(b).map_err(|_| Error::invalid_edge(token, "bad second endpoint"))?;
    if a == b {
        return Err(Error::invalid_edge(token, "self-loops are not allowed"));
    }
    Ok((a, b))
}

/// One interactive command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    Step,
    Reset,
    Restart,
    Clear,
    Sample { seed: Option<u64> },
    Algorithm(Algorithm),
    Start(NodeId),
    Add(Position),
    Connect(NodeId, NodeId),
    Remove(NodeId),
    Delete(Position),
    Move(NodeId, Position),
    Pick(Position),
    Delay(Duration),
    Show,
    Json,
    Help,
    Quit,
}

/// Short usage text for the interactive prompt.
pub const HELP: &str = "\
commands:
  play | pause | toggle | step | reset | restart
  algo <bfs|dfs>        start <id>          delay <ms>
  add <x> <y>           connect <a> <b>     remove <id>
  move <id> <x> <y>     delete <x> <y>      pick <x> <y>
  sample [seed]         clear               show | json
  help | quit";

impl Command {
    /// Parse one line of interactive input.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or malformed arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Ok(None);
        };

        let arity = |expected: usize| {
            Error::invalid_command(
                line.trim(),
                format!("expected {expected} argument(s), got {}", args.len()),
            )
        };

        let command = match (name.to_ascii_lowercase().as_str(), args) {
            ("play", _) => Self::Play,
            ("pause", _) => Self::Pause,
            ("toggle", _) => Self::Toggle,
            ("step" | "s", _) => Self::Step,
            ("reset", _) => Self::Reset,
            ("restart", _) => Self::Restart,
            ("clear", _) => Self::Clear,
            ("sample", []) => Self::Sample { seed: None },
            ("sample", [seed]) => Self::Sample {
                seed: Some(parse_number(line, seed)?),
            },
            ("sample", _) => {
                return Err(Error::invalid_command(line.trim(), "sample takes at most a seed"));
            }
            ("algo" | "algorithm", [algorithm]) => Self::Algorithm(algorithm.parse()?),
            ("start", [id]) => Self::Start(parse_node_id(id)?),
            ("add", [x, y]) => Self::Add(parse_point(line, x, y)?),
            ("connect" | "edge", [a, b]) => Self::Connect(parse_node_id(a)?, parse_node_id(b)?),
            ("remove" | "rm", [id]) => Self::Remove(parse_node_id(id)?),
            ("delete" | "del", [x, y]) => Self::Delete(parse_point(line, x, y)?),
            ("move", [id, x, y]) => Self::Move(parse_node_id(id)?, parse_point(line, x, y)?),
            ("pick", [x, y]) => Self::Pick(parse_point(line, x, y)?),
            ("delay" | "speed", [ms]) => {
                Self::Delay(Duration::from_millis(parse_number(line, ms)?))
            }
            ("algo" | "algorithm" | "start" | "remove" | "rm" | "delay" | "speed", _) => {
                return Err(arity(1));
            }
            ("add" | "connect" | "edge" | "delete" | "del" | "pick", _) => return Err(arity(2)),
            ("move", _) => return Err(arity(3)),
            ("show", _) => Self::Show,
            ("json", _) => Self::Json,
            ("help" | "?", _) => Self::Help,
            ("quit" | "exit" | "q", _) => Self::Quit,
            (other, _) => {
                return Err(Error::invalid_command(
                    line.trim(),
                    format!("unknown command '{other}'"),
                ));
            }
        };
        Ok(Some(command))
    }
}

fn parse_number(line: &str, word: &str) -> Result<u64> {
    word.parse()
        .map_err(|_| Error::invalid_command(line.trim(), format!("'{word}' is not a number")))
}

fn parse_point(line: &str, x: &str, y: &str) -> Result<Position> {
    let coordinate = |word: &str| {
        word.parse::<f64>().map_err(|_| {
            Error::invalid_command(line.trim(), format!("'{word}' is not a coordinate"))
        })
    };
    let position = Position::new(coordinate(x)?, coordinate(y)?);
    if position.is_finite() {
        Ok(position)
    } else {
        Err(Error::NonFiniteCoordinates {
            x: position.x,
            y: position.y,
        })
    }
}
