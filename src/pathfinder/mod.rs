pub mod bench;
pub mod heuristic;
pub mod occupancy;
pub mod safety;
mod search;
pub mod snake;
pub mod state;

pub use search::{find_path, COST_SCALE, NON_HUG_COST};

use crate::grid::types::Direction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// `None` if the target can't be reached.
    pub path:     Option<Vec<Direction>>,
    /// States pushed onto the open set.
    pub opened:   usize,
    /// States popped off the open set.
    pub explored: usize,
}

impl SearchReport {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.path.is_some()
    }
}
