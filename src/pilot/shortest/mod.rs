mod board;
mod search;
mod turn;

use log::debug;

use super::{error::PilotError, Pilot};
use crate::gridworld::{models::GameState, types::Turn};

/// Follows the shortest path to the food and answers with the relative
/// turn that enters its first cell.
pub struct ShortestPilot;

impl Pilot for ShortestPilot {
    fn next_turn(&self, game_state: &GameState) -> Result<Option<Turn>, PilotError> {
        let parsed = board::parse(game_state)?;
        let path = search::search(&parsed.grid, parsed.head, parsed.target)?;

        debug!(
            "{} steps from {} (facing {}) to {}",
            path.len() - 1,
            parsed.head,
            parsed.heading,
            parsed.target
        );

        let Some(&next) = path.get(1) else {
            // already sitting on the target; hold course.
            return Ok(Some(Turn::Straight));
        };

        turn::resolve(parsed.head, next, parsed.heading, &parsed.grid)
    }
}
