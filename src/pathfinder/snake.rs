use std::fmt;

use itertools::Itertools;

use super::occupancy::OccupancyMap;
use crate::{
    error::{Result, SnakeError},
    grid::{
        board::Board,
        types::{Coord, Direction},
    },
};

/// A snake's current shape on a board. The body is stored tail first, head
/// last.
#[derive(Clone, Debug)]
pub struct Snake {
    board:     Board,
    body:      Vec<Coord>,
    path:      Vec<Direction>,
    occupancy: OccupancyMap,
}

impl Snake {
    /// # Errors
    ///
    /// Fails if the body is empty, leaves the board, has a gap between two
    /// consecutive segments, or crosses itself.
    pub fn new(board: Board, body: Vec<Coord>) -> Result<Self> {
        if body.is_empty() {
            return Err(SnakeError::EmptyBody);
        }

        if let Some(&cell) = body.iter().find(|cell| !board.contains(**cell)) {
            return Err(SnakeError::OutOfBounds(cell));
        }

        let path = body
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| {
                Direction::between(from, to)
                    .ok_or(SnakeError::Disconnected { from, to })
            })
            .collect::<Result<Vec<_>>>()?;

        let occupancy = OccupancyMap::new(board, &body)?;

        Ok(Self {
            board,
            body,
            path,
            occupancy,
        })
    }

    /// Builds a snake by starting at `tail` and walking `moves` towards the
    /// head.
    ///
    /// # Errors
    ///
    /// Fails if `tail` is off the board, the walk leaves the board, or the
    /// walk crosses itself.
    pub fn from_moves(
        board: Board,
        tail: Coord,
        moves: &[Direction],
    ) -> Result<Self> {
        if !board.contains(tail) {
            return Err(SnakeError::OutOfBounds(tail));
        }

        let mut body = Vec::with_capacity(moves.len() + 1);
        body.push(tail);

        let mut cell = tail;
        for &direction in moves {
            cell = cell.neighbour(direction);
            if !board.contains(cell) {
                return Err(SnakeError::PathExitsBoard(cell));
            }
            body.push(cell);
        }

        Self::new(board, body)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn body(&self) -> &[Coord] {
        &self.body
    }

    /// The moves that lead from the tail to the head.
    #[must_use]
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    #[must_use]
    pub const fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn head(&self) -> Coord {
        self.body[self.body.len() - 1]
    }

    #[must_use]
    pub fn tail(&self) -> Coord {
        self.body[0]
    }
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.head();
        for y in (0..self.board.height).rev() {
            for x in 0..self.board.width {
                let cell = Coord { x, y };
                if cell == head {
                    write!(f, "H")?;
                } else if self.occupancy.free_at(cell).is_some() {
                    write!(f, "#")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
