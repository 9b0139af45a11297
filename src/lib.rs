#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::cast_possible_wrap, // board indices always fit in an i64
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
)]
pub mod error;
pub mod grid;
pub mod pathfinder;

pub use error::{Result, SnakeError};
pub use grid::{
    board::Board,
    types::{Coord, Direction},
};
pub use pathfinder::{find_path, snake::Snake, SearchReport};
