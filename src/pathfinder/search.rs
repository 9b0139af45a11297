use std::{cmp::Reverse, collections::BinaryHeap, time::Instant};

use log::{debug, trace};

use super::{
    heuristic::heuristic_map,
    snake::Snake,
    state::{PathState, StateArena, StateId},
    SearchReport,
};
use crate::{
    error::Result,
    grid::{
        types::{Coord, Direction},
        utils::MoveString,
    },
};

/// Weight of one move. Keeps every tie-break penalty accumulated along a path
/// well below the cost of a single extra move.
pub const COST_SCALE: u64 = 1 << 31;

/// Added to a move that doesn't run along a wall or the snake's own body.
pub const NON_HUG_COST: u64 = 1;

/// Searches for a sequence of moves that takes the snake's head to `target`
/// without hitting a wall or its own body, taking into account that the body
/// moves along behind the head.
///
/// The heuristic isn't admissible, so the path is not guaranteed to be the
/// shortest one. Nothing is said about whether the snake can survive after
/// arriving either. A `path` of `None` in the report means that no path exists.
///
/// The same cell reached at two depths is two different states, so there is
/// no closed set: a cell may be legitimately revisited once the body has
/// cleared it. Among states of equal priority the most recently opened one is
/// expanded first.
///
/// # Errors
///
/// Fails if `target` is not on the snake's board.
pub fn find_path(snake: &Snake, target: Coord) -> Result<SearchReport> {
    let start = Instant::now();

    let heuristic = heuristic_map(snake, target)?;
    let mut search = Search::new(snake, &heuristic);
    let path = search.run(target);

    debug!(
        "search to {target} {} after {} ms (opened: {}, explored: {})",
        match &path {
            Some(moves) => format!("found {}", MoveString(moves)),
            None => "found nothing".to_owned(),
        },
        start.elapsed().as_millis(),
        search.opened,
        search.explored,
    );

    Ok(SearchReport {
        path,
        opened: search.opened,
        explored: search.explored,
    })
}

struct Search<'a> {
    snake:     &'a Snake,
    heuristic: &'a [u64],
    arena:     StateArena,
    open_set:  BinaryHeap<(Reverse<u64>, StateId)>,
    opened:    usize,
    explored:  usize,
}

impl<'a> Search<'a> {
    fn new(snake: &'a Snake, heuristic: &'a [u64]) -> Self {
        Self {
            snake,
            heuristic,
            arena: StateArena::new(),
            open_set: BinaryHeap::new(),
            opened: 0,
            explored: 0,
        }
    }

    fn run(&mut self, target: Coord) -> Option<Vec<Direction>> {
        self.seed();

        while let Some((_, id)) = self.open_set.pop() {
            self.explored += 1;

            let current = *self.arena.get(id);
            trace!(
                "exploring {} at depth {} (cost {})",
                current.position,
                current.depth,
                current.cost
            );

            if current.position == target {
                return Some(self.arena.moves(id));
            }

            self.expand(id, current);
        }

        None
    }

    /// Opens the moves available from the real head. There is no path behind
    /// these yet, so only the initial body can block them.
    fn seed(&mut self) {
        let head = self.snake.head();
        for &direction in Direction::iter() {
            let position = head.neighbour(direction);
            if self.arena.is_legal(self.snake, None, position, 0) {
                self.open(PathState {
                    position,
                    direction,
                    depth: 0,
                    cost: 0,
                    parent: None,
                });
            }
        }
    }

    fn expand(&mut self, id: StateId, current: PathState) {
        let depth = current.depth + 1;

        for &direction in Direction::iter() {
            let position = current.position.neighbour(direction);
            if !self.arena.is_legal(self.snake, Some(id), position, depth) {
                continue;
            }

            let mut cost = current.cost + COST_SCALE;
            if !self.hugs(id, current.position, direction, depth) {
                cost += NON_HUG_COST;
            }

            self.open(PathState {
                position,
                direction,
                depth,
                cost,
                parent: Some(id),
            });
        }
    }

    /// A move hugs when exactly one of the two cells either side of the head
    /// along the axis of movement is blocked.
    fn hugs(
        &self,
        from: StateId,
        head: Coord,
        direction: Direction,
        depth: usize,
    ) -> bool {
        let (a, b) = if direction.is_horizontal() {
            (Direction::Left, Direction::Right)
        } else {
            (Direction::Down, Direction::Up)
        };

        let blocked = |side: Direction| {
            !self
                .arena
                .is_legal(self.snake, Some(from), head.neighbour(side), depth)
        };

        blocked(a) ^ blocked(b)
    }

    fn open(&mut self, state: PathState) {
        let estimate = self
            .snake
            .board()
            .index(state.position)
            .map_or(0, |index| self.heuristic[index]);
        let priority =
            state.cost.saturating_add(estimate.saturating_mul(COST_SCALE));

        let id = self.arena.push(state);
        self.open_set.push((Reverse(priority), id));
        self.opened += 1;
    }
}
