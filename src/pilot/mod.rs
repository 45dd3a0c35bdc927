pub mod error;
pub mod shortest;

pub use shortest::ShortestPilot;

use crate::gridworld::{models::GameState, types::Turn};
use error::PilotError;

pub trait Pilot {
    /// Computes the move for one snapshot. `Ok(None)` means the board left
    /// no safe turn; the host still has to answer the server with that.
    ///
    /// # Errors
    ///
    /// Fails on malformed or unwinnable snapshots; see [`PilotError`].
    fn next_turn(&self, game_state: &GameState) -> Result<Option<Turn>, PilotError>;
}
