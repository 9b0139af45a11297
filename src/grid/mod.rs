pub mod board;
pub mod models;
pub mod types;
pub mod utils;
