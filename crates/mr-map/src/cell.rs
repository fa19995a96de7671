//! Cell classification states.

use std::fmt;

/// What an agent knows about one cell of its window.
///
/// Classification is write-once in the wall/open dimension: a cell that
/// has been answered by the oracle never flips between `Wall` and the open
/// family.  The only permitted refinement is `Open` → `Visited`, recorded
/// when the agent first steps onto the cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Never classified.
    #[default]
    Unknown,
    /// Known open, not yet visited — a frontier cell.
    Open,
    /// Known impassable.
    Wall,
    /// Open and already stepped on (the start cell is `Visited` from
    /// construction).
    Visited,
    /// Read-only sentinel for addresses outside the window.  Never stored;
    /// returned by [`LocalMap::cell`][crate::LocalMap::cell] only.
    Outside,
}

impl Cell {
    /// `true` for `Wall` (the shape-defining value; everything else is
    /// "not a wall" for congruence purposes).
    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// `true` once the cell has been answered by the oracle.
    #[inline]
    pub fn is_classified(self) -> bool {
        !matches!(self, Cell::Unknown | Cell::Outside)
    }

    /// Rendering glyph: `?` unknown, `#` wall, `.` open or visited.
    pub fn glyph(self) -> char {
        match self {
            Cell::Unknown | Cell::Outside => '?',
            Cell::Wall => '#',
            Cell::Open | Cell::Visited => '.',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
