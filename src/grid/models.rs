use serde::{Deserialize, Serialize};

use super::types::{Coord, Direction};

/// A search request as read by the `pathfind` binary.
#[derive(Deserialize, Debug, Clone)]
pub struct Scenario {
    pub width:  i64,
    pub height: i64,
    /// Tail first, head last.
    pub body:   Vec<Coord>,
    pub target: Coord,
}

#[derive(Serialize, Debug)]
pub struct Outcome {
    pub found:    bool,
    pub moves:    Vec<Direction>,
    pub opened:   usize,
    pub explored: usize,
    pub millis:   u128,
}
