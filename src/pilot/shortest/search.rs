use pathfinding::prelude::astar;

use super::board::Grid;
use crate::{
    gridworld::{
        types::{Coord, Heading},
        utils::manhattan_distance,
    },
    pilot::error::PilotError,
};

/// Finds a minimum-step path from `source` to `target`, both inclusive.
///
/// Uniform unit cost with a Manhattan heuristic keeps the result optimal;
/// expanding neighbours in the fixed north, east, south, west order keeps
/// equal-cost ties deterministic for identical input.
///
/// # Errors
///
/// Returns [`PilotError::Unreachable`] when the grid disconnects the two
/// cells; never a partial path.
pub fn search(
    grid: &Grid,
    source: Coord,
    target: Coord,
) -> Result<Vec<Coord>, PilotError> {
    astar(
        &source,
        |&coord| {
            Heading::iter()
                .map(move |&heading| coord.neighbour(heading))
                .filter(|&cell| grid.is_traversable(cell))
                .map(|cell| (cell, 1_u64))
                .collect::<Vec<_>>()
        },
        |&coord| manhattan_distance(coord, target) as u64,
        |&coord| coord == target,
    )
    .map(|(path, _)| path)
    .ok_or(PilotError::Unreachable {
        from: source,
        to:   target,
    })
}
