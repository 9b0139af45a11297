use super::snake::Snake;
use crate::grid::types::{Coord, Direction};

pub type StateId = usize;

/// A hypothetical head position reached by a sequence of moves from the real
/// head. `depth` is the zero-based index of the move that produced it, so the
/// path up to and including this state is `depth + 1` moves long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathState {
    pub position:  Coord,
    pub direction: Direction,
    pub depth:     usize,
    pub cost:      u64,
    pub parent:    Option<StateId>,
}

/// Append-only storage for the search tree. States are never removed while a
/// search is running; the whole arena is dropped once it finishes.
#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<PathState>,
}

/// Walks a path from its newest state back towards the real head.
pub struct Trail<'a> {
    arena: &'a StateArena,
    next:  Option<StateId>,
}

impl<'a> Iterator for Trail<'a> {
    type Item = &'a PathState;

    fn next(&mut self) -> Option<Self::Item> {
        let state = &self.arena.states[self.next?];
        self.next = state.parent;
        Some(state)
    }
}

impl StateArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: PathState) -> StateId {
        self.states.push(state);
        self.states.len() - 1
    }

    #[must_use]
    pub fn get(&self, id: StateId) -> &PathState {
        &self.states[id]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub const fn trail(&self, from: Option<StateId>) -> Trail<'_> {
        Trail {
            arena: self,
            next:  from,
        }
    }

    /// The full move sequence from the real head to `id`.
    #[must_use]
    pub fn moves(&self, id: StateId) -> Vec<Direction> {
        let mut moves: Vec<_> =
            self.trail(Some(id)).map(|state| state.direction).collect();
        moves.reverse();
        moves
    }

    /// Whether `cell` is covered by the snake when the move at `depth` is made
    /// from the end of the path `from` (`None` being the real head).
    ///
    /// The initial body is checked through the occupancy map. The path's own
    /// trail is then walked back for as long as its segments are still part
    /// of the body, which also catches a vacated body cell that the path has
    /// since re-entered.
    #[must_use]
    pub fn is_occupied(
        &self,
        snake: &Snake,
        from: Option<StateId>,
        cell: Coord,
        depth: usize,
    ) -> bool {
        if snake.occupancy().blocks(cell, depth) {
            return true;
        }

        let size = snake.size();
        self.trail(from)
            .take_while(|piece| piece.depth + size > depth)
            .any(|piece| piece.position == cell)
    }

    #[must_use]
    pub fn is_legal(
        &self,
        snake: &Snake,
        from: Option<StateId>,
        cell: Coord,
        depth: usize,
    ) -> bool {
        snake.board().contains(cell)
            && !self.is_occupied(snake, from, cell, depth)
    }
}
