use super::types::Coord;
use crate::error::{Result, SnakeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width:  i64,
    pub height: i64,
}

impl Board {
    /// # Errors
    ///
    /// Fails if either dimension is below 2.
    pub const fn new(width: i64, height: i64) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(SnakeError::BoardTooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }

    /// Row-major index of `coord` into a dense per-cell array.
    #[must_use]
    pub const fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.x + coord.y * self.width) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Board::index`].
    #[must_use]
    pub const fn coord(&self, index: usize) -> Coord {
        let index = index as i64;
        Coord {
            x: index % self.width,
            y: index / self.width,
        }
    }

    #[must_use]
    pub const fn area(&self) -> usize {
        (self.width * self.height) as usize
    }
}
