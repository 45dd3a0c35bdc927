use itertools::Itertools;

use crate::{
    gridworld::{
        models::{Cell, GameState},
        types::{Coord, Heading},
    },
    pilot::error::PilotError,
};

/// Row-major traversability map derived from a single snapshot. Rebuilt
/// fresh every turn and passed around explicitly; nothing holds onto it
/// between snapshots.
#[derive(Clone, Debug)]
pub struct Grid {
    width:   i64,
    height:  i64,
    blocked: Vec<bool>,
}

impl Grid {
    fn new(width: i64, height: i64, blocked: Vec<bool>) -> Self {
        debug_assert_eq!(blocked.len() as i64, width * height);
        Self {
            width,
            height,
            blocked,
        }
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && coord.row < self.height
            && coord.col < self.width
    }

    /// Whether the search (or a reversal probe) may enter this cell.
    /// Off-board coordinates are never traversable.
    #[must_use]
    pub fn is_traversable(&self, coord: Coord) -> bool {
        self.contains(coord)
            && !self.blocked[(coord.row * self.width + coord.col) as usize]
    }
}

#[cfg(test)]
impl Grid {
    /// Builds a grid from rows of `.` (open) and `#` (blocked).
    pub fn from_rows(rows: &[&str]) -> Self {
        let blocked = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c == '#'))
            .collect();
        Self::new(rows[0].len() as i64, rows.len() as i64, blocked)
    }
}

/// The structured facts the rest of the pipeline needs from one snapshot.
#[derive(Debug)]
pub struct ParsedBoard {
    pub grid:    Grid,
    pub head:    Coord,
    pub heading: Heading,
    pub target:  Coord,
}

fn scan(board: &[Vec<Cell>]) -> impl Iterator<Item = (Coord, &Cell)> {
    board.iter().enumerate().flat_map(|(row, cells)| {
        cells.iter().enumerate().map(move |(col, cell)| {
            (
                Coord {
                    row: row as i64,
                    col: col as i64,
                },
                cell,
            )
        })
    })
}

/// Turns a raw snapshot into a traversability grid plus the head, heading
/// and target facts. Duplicate head or food markers are treated as a
/// validation error rather than silently picking one of them.
pub fn parse(state: &GameState) -> Result<ParsedBoard, PilotError> {
    let height = state.board.len() as i64;
    let width = state.board.first().map_or(0, Vec::len) as i64;
    if height == 0 || width == 0 {
        return Err(PilotError::MalformedSnapshot("board is empty".to_owned()));
    }
    if state.board.iter().any(|row| row.len() as i64 != width) {
        return Err(PilotError::MalformedSnapshot(
            "board rows differ in width".to_owned(),
        ));
    }

    let (head, heading) = scan(&state.board)
        .filter_map(|(coord, cell)| match cell {
            Cell::Occupant(occupant)
                if occupant.player == state.you
                    && !occupant.dead.unwrap_or(false) =>
            {
                occupant.head.map(|heading| (coord, heading))
            }
            _ => None,
        })
        .exactly_one()
        .map_err(|heads| match heads.count() {
            0 => PilotError::AgentNotFound(state.you.clone()),
            n => PilotError::MalformedSnapshot(format!(
                "{n} head cells claim to be player {:?}",
                state.you
            )),
        })?;

    let target = scan(&state.board)
        .filter_map(|(coord, cell)| cell.is_food().then_some(coord))
        .exactly_one()
        .map_err(|foods| match foods.count() {
            0 => PilotError::TargetNotFound,
            n => PilotError::MalformedSnapshot(format!(
                "{n} food markers on the board"
            )),
        })?;

    // food and our own head stay open to the search; every other occupied
    // cell blocks passage, dead segments included.
    let blocked = scan(&state.board)
        .map(|(coord, cell)| match cell {
            Cell::Empty => false,
            Cell::Marker(_) => !cell.is_food(),
            Cell::Occupant(_) => coord != head,
        })
        .collect();

    Ok(ParsedBoard {
        grid: Grid::new(width, height, blocked),
        head,
        heading,
        target,
    })
}
