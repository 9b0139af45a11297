use std::fmt;

use super::types::{Coord, Direction};

#[must_use]
pub const fn manhattan_distance(a: Coord, b: Coord) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Formats a move sequence as a compact string of direction letters, e.g.
/// `RRUL`.
pub struct MoveString<'a>(pub &'a [Direction]);

impl fmt::Display for MoveString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for direction in self.0 {
            write!(f, "{}", direction.letter())?;
        }
        Ok(())
    }
}
