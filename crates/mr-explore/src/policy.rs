//! The frontier move policy.

use mr_core::{Direction, GridPos, DIRECTION_ORDER};
use mr_map::{Cell, LocalMap};

/// First neighbour of `at` that is known open and not yet visited, in the
/// shared scan order.  `None` when no such neighbour exists — the caller
/// then decides between backtracking and passing.
pub fn choose_move(map: &LocalMap, at: GridPos) -> Option<Direction> {
    DIRECTION_ORDER
        .into_iter()
        .find(|&dir| map.cell(at.step(dir)) == Cell::Open)
}
