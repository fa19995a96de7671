//! Movement directions and the shared neighbour-scan orders.
//!
//! # Determinism
//!
//! Every component that scans a cell's neighbours — exploration moves, BFS
//! layer expansion, path reconstruction, navigation — iterates
//! [`DIRECTION_ORDER`].  That single list is the sole source of
//! move-sequence determinism: given identical maze topology and identical
//! oracle answers, every run replays the same moves, turn count, and
//! meeting cell.

use std::fmt;

/// One of the four cardinal movement directions.
///
/// The vertical axis grows downward: `Down` is `+y`, `Up` is `-y`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Neighbour priority shared by exploration, BFS expansion, path
/// reconstruction, and navigation.
///
/// Do not reorder.  The relative priority (`Down` before `Right` before
/// `Up` before `Left`) is observable in every move an agent makes.
pub const DIRECTION_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
];

/// Preference order for the one-step separation nudge after an unplanned
/// meeting.  Deliberately distinct from [`DIRECTION_ORDER`]; nothing but
/// the early-meeting fallback may use it.
pub const NUDGE_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// The direction that undoes this one.
    #[inline]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Horizontal component of a one-cell step in this direction.
    #[inline]
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            _ => 0,
        }
    }

    /// Vertical component of a one-cell step in this direction.
    #[inline]
    pub fn dy(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            _ => 0,
        }
    }

    /// Lower-case label, useful for trace output and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
