use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};
use snake_pathfinder::{
    find_path,
    pathfinder::{
        bench::{random_snake, walled_off_snake},
        heuristic::heuristic_map,
    },
    Board,
    Coord,
    Direction,
    Snake,
    SnakeError,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Plays `moves` out on a plain copy of the body and returns where the head
/// ends up, or a description of the first collision.
fn replay(snake: &Snake, moves: &[Direction]) -> Result<Coord, String> {
    let mut body: VecDeque<Coord> = snake.body().iter().copied().collect();

    for (i, &direction) in moves.iter().enumerate() {
        let head = *body.back().ok_or("empty body")?;
        let next = head.neighbour(direction);

        // the tail moves off before the head arrives
        body.pop_front();

        if !snake.board().contains(next) {
            return Err(format!("move {i} ({direction}) leaves the board"));
        }
        if body.contains(&next) {
            return Err(format!(
                "move {i} ({direction}) hits the body at {next}"
            ));
        }
        body.push_back(next);
    }

    body.back().copied().ok_or_else(|| "empty body".to_owned())
}

fn snake(
    width: i64,
    height: i64,
    body: &[(i64, i64)],
) -> Result<Snake, SnakeError> {
    Snake::new(
        Board::new(width, height)?,
        body.iter().map(|&(x, y)| Coord { x, y }).collect(),
    )
}

fn assert_reaches(
    snake: &Snake,
    target: Coord,
) -> Result<Vec<Direction>, String> {
    let report = find_path(snake, target).map_err(|e| e.to_string())?;
    let moves = report.path.ok_or(format!("no path to {target}"))?;
    assert_eq!(replay(snake, &moves)?, target);
    Ok(moves)
}

#[test]
fn single_segment_reaches_every_other_cell_of_a_tiny_board() -> TestResult {
    let snake = snake(2, 2, &[(0, 0)])?;

    for target in [Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)] {
        let moves = assert_reaches(&snake, target)?;
        assert!(!moves.is_empty());
    }
    Ok(())
}

#[test]
fn steps_off_a_column_to_reach_the_corner() -> TestResult {
    let snake = snake(3, 3, &[(0, 0), (0, 1), (0, 2)])?;

    let moves = assert_reaches(&snake, Coord::new(1, 0))?;
    assert!(matches!(moves[0], Direction::Right | Direction::Down));
    Ok(())
}

#[test]
fn waits_for_the_body_to_clear_the_target() -> TestResult {
    // the bottom row is full and its left end bends up into (0,1)
    let snake = snake(3, 3, &[(0, 1), (0, 0), (1, 0), (2, 0)])?;

    for &cell in snake.body() {
        let free_at = snake
            .occupancy()
            .free_at(cell)
            .ok_or("body cell missing from occupancy")?;
        let moves = assert_reaches(&snake, cell)?;
        // the move that lands on the cell has index moves.len() - 1, which
        // can't come before the body has left it
        assert!(
            moves.len() > free_at,
            "reached {cell} after {} moves but it frees at depth {free_at}",
            moves.len()
        );
    }
    Ok(())
}

#[test]
fn waits_for_the_tail_of_a_full_row() -> TestResult {
    let snake = snake(3, 3, &[(0, 0), (1, 0), (2, 0)])?;

    let moves = assert_reaches(&snake, Coord::new(1, 0))?;
    assert!(moves.len() >= 2);
    Ok(())
}

#[test]
fn search_is_deterministic() -> TestResult {
    let snakes = [
        snake(3, 3, &[(0, 0), (0, 1), (0, 2)])?,
        snake(5, 4, &[(0, 0), (1, 0), (2, 0), (2, 1), (1, 1)])?,
        snake(6, 6, &[(3, 3)])?,
    ];

    for snake in &snakes {
        let board = snake.board();
        let target = Coord::new(board.width - 1, board.height - 1);
        let first = find_path(snake, target)?;
        for _ in 0..3 {
            assert_eq!(find_path(snake, target)?, first);
        }
    }
    Ok(())
}

#[test]
fn random_short_snakes_only_take_legal_paths() -> TestResult {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut found = 0;

    for _ in 0..200 {
        let board = Board::new(rng.gen_range(4..=6), rng.gen_range(4..=6))?;
        let snake = random_snake(board, rng.gen_range(1..=5), &mut rng)?;
        let target = Coord {
            x: rng.gen_range(0..board.width),
            y: rng.gen_range(0..board.height),
        };

        let report = find_path(&snake, target)?;
        assert!(report.explored <= report.opened);

        let Some(moves) = report.path else {
            continue;
        };
        found += 1;

        assert_eq!(replay(&snake, &moves)?, target, "snake:\n{snake}");
        if let Some(free_at) = snake.occupancy().free_at(target) {
            assert!(moves.len() > free_at);
        }
    }

    assert!(found > 150, "only {found} of 200 searches found a path");
    Ok(())
}

#[test]
fn heuristic_is_repeatable_for_random_snakes() -> TestResult {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..20 {
        let board = Board::new(7, 5)?;
        let snake = random_snake(board, rng.gen_range(1..=20), &mut rng)?;
        let target = Coord {
            x: rng.gen_range(0..board.width),
            y: rng.gen_range(0..board.height),
        };

        assert_eq!(
            heuristic_map(&snake, target)?,
            heuristic_map(&snake, target)?
        );
    }
    Ok(())
}

#[test]
fn rejects_targets_off_the_board() -> TestResult {
    let snake = snake(3, 3, &[(1, 1)])?;
    assert_eq!(
        find_path(&snake, Coord::new(-1, 1)),
        Err(SnakeError::TargetOutOfBounds(Coord::new(-1, 1)))
    );
    Ok(())
}

#[test]
#[ignore = "slow without optimisations"]
fn gets_around_the_walled_off_sample() -> TestResult {
    let snake = walled_off_snake()?;
    let target = Coord::new(0, 0);

    let moves = assert_reaches(&snake, target)?;
    // the head has to wait for row 4 to start clearing before it can cross
    assert!(moves.len() > 17);
    Ok(())
}
