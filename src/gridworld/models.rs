use serde::{Deserialize, Serialize};

use crate::gridworld::types::{Heading, Turn};

/// The marker string the game server uses for the food cell.
pub const FOOD_MARKER: &str = "🍎";

/// A body or head segment of some player's snake. Only head cells carry a
/// heading; `dead` marks leftover segments of an eliminated snake.
#[derive(Deserialize, Debug, Clone)]
pub struct Occupant {
    pub player: String,
    pub head:   Option<Heading>,
    pub dead:   Option<bool>,
}

/// One board cell as it arrives on the wire: `null` for empty space, a bare
/// marker string for food, or an occupant record.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Occupant(Occupant),
    Marker(String),
}

impl Cell {
    #[must_use]
    pub fn is_food(&self) -> bool {
        matches!(self, Cell::Marker(marker) if marker == FOOD_MARKER)
    }
}

/// One turn's snapshot: the full board plus our own player id.
#[derive(Deserialize, Debug, Clone)]
pub struct GameState {
    pub you:   String,
    pub board: Vec<Vec<Cell>>,
}

#[derive(Serialize, Debug)]
pub struct Status {
    pub name:    String,
    pub version: String,
}

/// `turn` is `None` when no safe move exists; that still has to go on the
/// wire, so it serializes as an explicit null rather than failing.
#[derive(Serialize, Debug)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub turn: Option<Turn>,
}
