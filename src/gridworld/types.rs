use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

/// Absolute facing on the board. Row 0 is the northern edge, so north is
/// "row minus one".
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Heading {
    /// Fixed north, east, south, west order. Neighbour expansion during the
    /// path search relies on this order staying stable.
    pub fn iter() -> Iter<'static, Heading> {
        static HEADINGS: [Heading; 4] = [
            Heading::North,
            Heading::East,
            Heading::South,
            Heading::West,
        ];
        HEADINGS.iter()
    }

    #[must_use]
    pub const fn opposite(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }

    /// 90° counter-clockwise.
    #[must_use]
    pub const fn left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// 90° clockwise.
    #[must_use]
    pub const fn right(self) -> Heading {
        self.left().opposite()
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Heading::North => "north",
                Heading::East => "east",
                Heading::South => "south",
                Heading::West => "west",
            }
        )
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    #[must_use]
    pub const fn neighbour(self, heading: Heading) -> Coord {
        match heading {
            Heading::North => Coord {
                row: self.row - 1,
                col: self.col,
            },
            Heading::South => Coord {
                row: self.row + 1,
                col: self.col,
            },
            Heading::East => Coord {
                row: self.row,
                col: self.col + 1,
            },
            Heading::West => Coord {
                row: self.row,
                col: self.col - 1,
            },
        }
    }

    /// The heading of the single orthogonal step from `self` to `to`, or
    /// `None` when the two cells are not exactly one such step apart.
    #[must_use]
    pub const fn heading_to(self, to: Coord) -> Option<Heading> {
        match (to.row - self.row, to.col - self.col) {
            (-1, 0) => Some(Heading::North),
            (1, 0) => Some(Heading::South),
            (0, 1) => Some(Heading::East),
            (0, -1) => Some(Heading::West),
            _ => None,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move relative to the current heading, as the game server expects it.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Turn {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "S")]
    Straight,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Turn::Left => "left",
                Turn::Right => "right",
                Turn::Straight => "straight",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_are_inverses() {
        for &heading in Heading::iter() {
            assert_eq!(heading.left().right(), heading);
            assert_eq!(heading.right().left(), heading);
            assert_eq!(heading.left().opposite(), heading.right());
        }
    }

    #[test]
    fn heading_to_covers_the_four_steps() {
        let origin = Coord { row: 3, col: 3 };
        assert_eq!(
            origin.heading_to(Coord { row: 2, col: 3 }),
            Some(Heading::North)
        );
        assert_eq!(
            origin.heading_to(Coord { row: 3, col: 4 }),
            Some(Heading::East)
        );
        assert_eq!(
            origin.heading_to(Coord { row: 4, col: 3 }),
            Some(Heading::South)
        );
        assert_eq!(
            origin.heading_to(Coord { row: 3, col: 2 }),
            Some(Heading::West)
        );
    }

    #[test]
    fn heading_to_rejects_diagonals_and_jumps() {
        let origin = Coord { row: 3, col: 3 };
        assert_eq!(origin.heading_to(origin), None);
        assert_eq!(origin.heading_to(Coord { row: 4, col: 4 }), None);
        assert_eq!(origin.heading_to(Coord { row: 3, col: 5 }), None);
    }

    #[test]
    fn neighbour_follows_row_zero_north_convention() {
        let origin = Coord { row: 1, col: 1 };
        assert_eq!(
            origin.neighbour(Heading::North),
            Coord { row: 0, col: 1 }
        );
        assert_eq!(
            origin.neighbour(Heading::South),
            Coord { row: 2, col: 1 }
        );
    }
}
