use thiserror::Error;

use crate::gridworld::types::Coord;

/// Everything that can go wrong between receiving a snapshot and producing
/// a move. "No safe turn" is deliberately not in here: the host must still
/// answer the server in that case, so it travels as a normal value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PilotError {
    #[error("no live head cell belongs to player {0:?}")]
    AgentNotFound(String),

    #[error("no food marker on the board")]
    TargetNotFound,

    #[error("no path from {from} to {to}")]
    Unreachable { from: Coord, to: Coord },

    #[error("path step from {from} to {to} is not a single orthogonal move")]
    InvalidStep { from: Coord, to: Coord },

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
}
