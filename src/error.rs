use thiserror::Error;

use crate::grid::types::{Coord, Direction};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnakeError {
    #[error("board must be at least 2x2, got {width}x{height}")]
    BoardTooSmall { width: i64, height: i64 },

    #[error("snake must have at least one body segment")]
    EmptyBody,

    #[error("body segment {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("body segments {from} and {to} are not connected")]
    Disconnected { from: Coord, to: Coord },

    #[error("body intersects itself at {0}")]
    SelfIntersecting(Coord),

    #[error("initial path leaves the board at {0}")]
    PathExitsBoard(Coord),

    #[error("target {0} is outside the board")]
    TargetOutOfBounds(Coord),

    #[error("move #{index} ({direction}) is not legal")]
    IllegalMove { index: usize, direction: Direction },
}

pub type Result<T> = std::result::Result<T, SnakeError>;
