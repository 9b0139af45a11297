use super::{
    snake::Snake,
    state::{PathState, StateArena, StateId},
};
use crate::{
    error::{Result, SnakeError},
    grid::types::{Coord, Direction},
};

/// Checks whether, after following `moves`, the snake can keep going for at
/// least as many moves as it is long. Once it has, every cell it covers is
/// one it put there itself, so this is a cheap proxy for "not trapped".
///
/// The search is depth first and stops at the first walk that is long enough.
/// When no such walk exists every candidate is tried, which gets expensive for
/// long snakes in tight spaces.
///
/// # Errors
///
/// Fails with [`SnakeError::IllegalMove`] if one of `moves` would leave the
/// board or run into the body.
pub fn has_escape_walk(snake: &Snake, moves: &[Direction]) -> Result<bool> {
    let mut arena = StateArena::new();
    let mut current: Option<StateId> = None;
    let mut position = snake.head();

    for (index, &direction) in moves.iter().enumerate() {
        let next = position.neighbour(direction);
        if !arena.is_legal(snake, current, next, index) {
            return Err(SnakeError::IllegalMove { index, direction });
        }
        current = Some(arena.push(PathState {
            position: next,
            direction,
            depth: index,
            cost: 0,
            parent: current,
        }));
        position = next;
    }

    Ok(walk(snake, &mut arena, current, position, moves.len()))
}

fn walk(
    snake: &Snake,
    arena: &mut StateArena,
    from: Option<StateId>,
    position: Coord,
    made: usize,
) -> bool {
    let goal = made + snake.size();

    // (end of path, head position, moves made so far)
    let mut stack = vec![(from, position, made)];

    while let Some((from, position, made)) = stack.pop() {
        if made >= goal {
            return true;
        }

        for &direction in Direction::iter() {
            let next = position.neighbour(direction);
            if arena.is_legal(snake, from, next, made) {
                let id = arena.push(PathState {
                    position: next,
                    direction,
                    depth: made,
                    cost: 0,
                    parent: from,
                });
                stack.push((Some(id), next, made + 1));
            }
        }
    }

    false
}
