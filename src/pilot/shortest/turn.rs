use super::board::Grid;
use crate::{
    gridworld::types::{Coord, Heading, Turn},
    pilot::error::PilotError,
};

/// Translates the next path cell into a turn relative to the current
/// heading.
///
/// The three 90° cases come straight from the turn table. When the path
/// wants the cell directly behind the agent, the table has no answer and
/// the two cells beside the current position are probed instead, always
/// counter-clockwise side first; `Ok(None)` means neither side is open.
///
/// # Errors
///
/// Returns [`PilotError::InvalidStep`] when `next` is not exactly one
/// orthogonal step from `current`.
pub fn resolve(
    current: Coord,
    next: Coord,
    heading: Heading,
    grid: &Grid,
) -> Result<Option<Turn>, PilotError> {
    let Some(towards) = current.heading_to(next) else {
        return Err(PilotError::InvalidStep {
            from: current,
            to:   next,
        });
    };

    if towards == heading {
        return Ok(Some(Turn::Straight));
    }
    if towards == heading.right() {
        return Ok(Some(Turn::Right));
    }
    if towards == heading.left() {
        return Ok(Some(Turn::Left));
    }

    // reversal: whichever side of the agent is open wins, left first.
    if grid.is_traversable(current.neighbour(heading.left())) {
        Ok(Some(Turn::Left))
    } else if grid.is_traversable(current.neighbour(heading.right())) {
        Ok(Some(Turn::Right))
    } else {
        Ok(None)
    }
}
