//! The merged absolute grid and its tagged cell type.

use mr_core::GridPos;

/// State of one merged-grid cell.
///
/// One variant per meaning — classification, BFS distance, and path tags
/// share no numeric range, so no value can ever be misread as another.
/// Distance labels start at 1 (the BFS source); `Open` means "no label
/// yet".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MergedCell {
    /// Unknown to both agents (an enclosed pocket).
    Unknown,
    /// Wall in at least one source map (congruence guarantees: in both).
    Wall,
    /// Open, not yet reached by the flood fill.
    Open,
    /// BFS distance label; 1 at agent A's cell, incrementing per layer.
    Distance(u32),
    /// On the planned route, not yet walked.
    PathMarker,
    /// On the planned route, already walked; never re-entered.
    Traversed,
}

/// Absolute grid sized to the common bounding box of both explored rooms.
///
/// Coordinates run from `(0, 0)` (top-left) to `(width - 1, height - 1)`;
/// out-of-range reads return `None`, which every consumer treats as "not
/// expandable".
#[derive(Clone, Debug)]
pub struct MergedMap {
    width: i32,
    height: i32,
    cells: Vec<MergedCell>,
}

impl MergedMap {
    /// An all-`Open` grid; the aligner overwrites walls and pockets.
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![MergedCell::Open; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, p: GridPos) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: GridPos) -> Option<usize> {
        self.in_bounds(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, p: GridPos) -> Option<MergedCell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The BFS label at `p`, if the cell carries one.
    #[inline]
    pub fn distance(&self, p: GridPos) -> Option<u32> {
        match self.cell(p) {
            Some(MergedCell::Distance(d)) => Some(d),
            _ => None,
        }
    }

    /// Overwrite the cell at `p`.  In-bounds only; the grid is fixed-size.
    pub fn set(&mut self, p: GridPos, cell: MergedCell) {
        match self.index(p) {
            Some(i) => self.cells[i] = cell,
            None => debug_assert!(false, "write outside the merged grid at {p}"),
        }
    }

    /// Rendering glyph per cell: `?` unknown, `#` wall, `.` anything open.
    pub fn glyph(&self, p: GridPos) -> char {
        match self.cell(p) {
            Some(MergedCell::Unknown) | None => '?',
            Some(MergedCell::Wall) => '#',
            Some(_) => '.',
        }
    }
}
