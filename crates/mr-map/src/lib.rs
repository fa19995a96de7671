//! `mr-map` — an agent's private, bounded, relative-coordinate knowledge of
//! the maze.
//!
//! Each agent owns one [`LocalMap`]: a square window of cells centred on
//! the agent's own start cell (the frame origin).  Cells are classified
//! from world-oracle answers and refined as the agent walks; the map also
//! keeps the two counters that drive the exploration state machine:
//!
//! - `frontier`  — known-open cells not yet visited,
//! - `explored`  — visited cells, excluding the start.
//!
//! Exploration of a bounded room is complete exactly when `frontier`
//! returns to zero.

pub mod bounds;
pub mod cell;
pub mod local_map;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::Bounds;
pub use cell::Cell;
pub use local_map::{LocalMap, DEFAULT_HALF_EXTENT};
