use crate::{
    error::{Result, SnakeError},
    grid::{board::Board, types::Coord},
};

/// Dense per-cell table of the depth at which each body segment moves off its
/// cell. The segment `k` steps from the tail frees at depth `k`, so the tail
/// itself can be re-entered by the very first move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMap {
    board:   Board,
    free_at: Vec<Option<usize>>,
    len:     usize,
}

impl OccupancyMap {
    /// Builds the table from a tail-first body.
    ///
    /// # Errors
    ///
    /// Fails if a segment is off the board or the body visits a cell twice.
    pub fn new(board: Board, body: &[Coord]) -> Result<Self> {
        let mut free_at = vec![None; board.area()];

        for (depth, &cell) in body.iter().enumerate() {
            let index = board.index(cell).ok_or(SnakeError::OutOfBounds(cell))?;
            if free_at[index].is_some() {
                return Err(SnakeError::SelfIntersecting(cell));
            }
            free_at[index] = Some(depth);
        }

        Ok(Self {
            board,
            free_at,
            len: body.len(),
        })
    }

    #[must_use]
    pub fn free_at(&self, coord: Coord) -> Option<usize> {
        self.board.index(coord).and_then(|index| self.free_at[index])
    }

    /// Whether the initial body still covers `coord` when a move at `depth` is
    /// made.
    #[must_use]
    pub fn blocks(&self, coord: Coord, depth: usize) -> bool {
        self.free_at(coord).is_some_and(|free_at| free_at > depth)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
