//! The bounded relative grid an agent builds while exploring.
//!
//! # Data layout
//!
//! Cells live in one flat `Vec` of side `2 * half_extent + 1`, indexed by
//!
//! ```text
//! cells[(y + h) * side + (x + h)]        for x, y in [-h, +h]
//! ```
//!
//! with the agent's start cell at the centre `(0, 0)`.  Reads outside the
//! window return the [`Cell::Outside`] sentinel; writes outside are a
//! programming error and are rejected (the sentinel is never mutated).
//! The window exists so a correctly bounded room can never run off the
//! edge — a room larger than the window is outside this map's contract.

use mr_core::{Direction, GridPos};

use crate::{Bounds, Cell};

/// Default window half-extent: a 21×21 cell window.
pub const DEFAULT_HALF_EXTENT: i32 = 10;

/// One agent's accumulated knowledge of its surroundings.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalMap {
    half_extent: i32,
    /// Flat row-major cell storage, side `2 * half_extent + 1`.
    cells: Vec<Cell>,
    /// Known-open cells not yet visited.
    frontier: u32,
    /// Visited cells, excluding the start cell.
    explored: u32,
}

impl LocalMap {
    /// Create an all-`Unknown` window with the start cell `Visited`.
    pub fn new(half_extent: i32) -> Self {
        debug_assert!(half_extent > 0);
        let side = (2 * half_extent + 1) as usize;
        let mut map = Self {
            half_extent,
            cells: vec![Cell::Unknown; side * side],
            frontier: 0,
            explored: 0,
        };
        map.set(GridPos::ORIGIN, Cell::Visited);
        map
    }

    #[inline]
    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Known-open, not-yet-visited cell count.
    #[inline]
    pub fn frontier(&self) -> u32 {
        self.frontier
    }

    /// Visited cell count, excluding the start cell.
    #[inline]
    pub fn explored(&self) -> u32 {
        self.explored
    }

    /// Everything seen so far: `explored + frontier`.  Two rooms of equal
    /// shape always converge to equal volumes.
    #[inline]
    pub fn volume(&self) -> u32 {
        self.explored + self.frontier
    }

    // ── Cell access ───────────────────────────────────────────────────────

    fn index(&self, p: GridPos) -> Option<usize> {
        let h = self.half_extent;
        if p.x < -h || p.x > h || p.y < -h || p.y > h {
            return None;
        }
        let side = (2 * h + 1) as usize;
        Some((p.y + h) as usize * side + (p.x + h) as usize)
    }

    /// The cell at `p`, or [`Cell::Outside`] beyond the window.
    #[inline]
    pub fn cell(&self, p: GridPos) -> Cell {
        match self.index(p) {
            Some(i) => self.cells[i],
            None => Cell::Outside,
        }
    }

    fn set(&mut self, p: GridPos, cell: Cell) {
        match self.index(p) {
            Some(i) => self.cells[i] = cell,
            None => debug_assert!(false, "write outside the map window at {p}"),
        }
    }

    // ── Mutation contract ─────────────────────────────────────────────────

    /// Record the oracle's answer for the neighbour of `at` in `dir`.
    ///
    /// Idempotent: already-classified neighbours (and `Outside` reads) are
    /// left untouched.  A newly open cell joins the frontier.
    pub fn classify(&mut self, at: GridPos, dir: Direction, passable: bool) {
        let target = at.step(dir);
        if self.cell(target) != Cell::Unknown {
            return;
        }
        if passable {
            self.set(target, Cell::Open);
            self.frontier += 1;
        } else {
            self.set(target, Cell::Wall);
        }
    }

    /// Record a forward move onto the frontier cell `to`: the cell becomes
    /// `Visited`, leaves the frontier, and joins the explored count.
    ///
    /// Backtrack moves have no map-side record — their destination is
    /// already `Visited` and the counters must not change.
    pub fn record_forward(&mut self, to: GridPos) {
        debug_assert_eq!(self.cell(to), Cell::Open, "forward move onto non-frontier cell");
        self.set(to, Cell::Visited);
        self.frontier -= 1;
        self.explored += 1;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Tight bounding box of all classified cells (walls included).
    ///
    /// Infallible: the start cell is `Visited` from construction, so at
    /// least one cell is always known.
    pub fn known_bounds(&self) -> Bounds {
        let mut bounds = Bounds::at(GridPos::ORIGIN);
        let h = self.half_extent;
        for y in -h..=h {
            for x in -h..=h {
                let p = GridPos::new(x, y);
                if self.cell(p).is_classified() {
                    bounds.extend(p);
                }
            }
        }
        bounds
    }
}

impl Default for LocalMap {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_EXTENT)
    }
}
