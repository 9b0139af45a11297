use std::time::Instant;

use log::info;
use rand::Rng;

use super::{find_path, snake::Snake};
use crate::{
    error::Result,
    grid::{
        board::Board,
        types::{Coord, Direction},
    },
};

/// A snake laid out back and forth along the rows starting from (0, 0), tail
/// first. `length` is clamped to the board's area.
///
/// # Errors
///
/// Fails if `length` is 0.
pub fn make_snake(board: Board, length: usize) -> Result<Snake> {
    let body = (0..board.height)
        .flat_map(|y| {
            (0..board.width).map(move |i| {
                let x = if y % 2 == 0 { i } else { board.width - 1 - i };
                Coord { x, y }
            })
        })
        .take(length)
        .collect();

    Snake::new(board, body)
}

/// 10x10 board with a 27 segment snake whose middle fills rows 3 and 4, so
/// the head is cut off from the bottom of the board until the body clears.
///
/// # Errors
///
/// Never in practice; the layout is fixed.
pub fn walled_off_snake() -> Result<Snake> {
    let board = Board::new(10, 10)?;
    let mut body: Vec<Coord> =
        [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2), (1, 2), (0, 2)]
            .into_iter()
            .map(|(x, y)| Coord { x, y })
            .collect();
    body.extend((0..10).map(|x| Coord { x, y: 3 }));
    body.extend((0..10).rev().map(|x| Coord { x, y: 4 }));

    Snake::new(board, body)
}

/// Grows a snake from a random cell by repeatedly stepping the head onto a
/// random free neighbour. Stops early if the head gets boxed in, so the
/// result can be shorter than `length`.
///
/// # Errors
///
/// Fails if `length` is 0.
pub fn random_snake<R: Rng>(
    board: Board,
    length: usize,
    rng: &mut R,
) -> Result<Snake> {
    let mut body = Vec::with_capacity(length);
    if length > 0 {
        body.push(Coord {
            x: rng.gen_range(0..board.width),
            y: rng.gen_range(0..board.height),
        });
    }

    while body.len() < length {
        let head = body[body.len() - 1];
        let options: Vec<Coord> = Direction::iter()
            .map(|&direction| head.neighbour(direction))
            .filter(|cell| board.contains(*cell) && !body.contains(cell))
            .collect();

        if options.is_empty() {
            break;
        }
        body.push(options[rng.gen_range(0..options.len())]);
    }

    Snake::new(board, body)
}

/// A uniformly chosen cell that the snake doesn't cover, if there is one.
pub fn random_free_cell<R: Rng>(snake: &Snake, rng: &mut R) -> Option<Coord> {
    let board = snake.board();
    let free: Vec<Coord> = (0..board.area())
        .map(|index| board.coord(index))
        .filter(|cell| snake.occupancy().free_at(*cell).is_none())
        .collect();

    if free.is_empty() {
        None
    } else {
        Some(free[rng.gen_range(0..free.len())])
    }
}

/// Mean time in milliseconds to search from `snake` to `target` over `runs`
/// runs.
///
/// # Errors
///
/// Fails if `target` is not on the board.
pub fn benchmark_search(
    snake: &Snake,
    target: Coord,
    runs: u32,
) -> Result<f64> {
    info!(
        "measuring search performance for a {} segment snake with {runs} \
         runs...",
        snake.size()
    );

    let mut total = 0.0;
    for _ in 0..runs {
        let now = Instant::now();
        find_path(snake, target)?;
        total += now.elapsed().as_secs_f64() * 1000.0;
    }

    let mean = total / f64::from(runs.max(1));
    info!("mean search time: {mean:.2} ms");
    Ok(mean)
}
