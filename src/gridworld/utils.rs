use crate::gridworld::types::Coord;

#[must_use]
pub const fn manhattan_distance(a: Coord, b: Coord) -> i64 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
