//! Tight bounding box over known cells.

use mr_core::GridPos;

/// Inclusive rectangle of cells, in whatever frame its producer used.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: GridPos,
    pub max: GridPos,
}

impl Bounds {
    /// A 1×1 box containing only `p`.
    pub fn at(p: GridPos) -> Self {
        Self { min: p, max: p }
    }

    /// Grow the box (if needed) to contain `p`.
    pub fn extend(&mut self, p: GridPos) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Number of cell columns covered (inclusive).
    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// Number of cell rows covered (inclusive).
    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    #[inline]
    pub fn contains(&self, p: GridPos) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(self, other: Bounds) -> Bounds {
        let mut out = self;
        out.extend(other.min);
        out.extend(other.max);
        out
    }

    /// Translate the whole box by `offset`.
    pub fn translate(self, offset: GridPos) -> Bounds {
        Bounds {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}
